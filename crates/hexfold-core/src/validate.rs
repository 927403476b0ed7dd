use hexfold_protocol::{
    ClanId, CoordinateError, Diagnostic, Document, LinearCoord, MapError, SchemaError, TurnId,
    UnitReport,
};

/// Check the structural fields of every document, returning every problem
/// found. An empty result means extraction can proceed.
pub fn validate(documents: &[Document], schema_version: &str) -> Vec<Diagnostic> {
    let mut errors = Vec::new();
    for document in documents {
        validate_document(document, schema_version, &mut errors);
    }
    tracing::debug!(
        documents = documents.len(),
        errors = errors.len(),
        "validated documents"
    );
    errors
}

fn validate_document(document: &Document, schema_version: &str, errors: &mut Vec<Diagnostic>) {
    let label = document.label();
    let mut report = |context: String, error: SchemaError| {
        errors.push(Diagnostic::new(context, error));
    };

    if document.schema_version != schema_version {
        report(
            label.clone(),
            SchemaError::Version {
                expected: schema_version.to_string(),
                found: document.schema_version.clone(),
            },
        );
    }
    if document.game.is_empty() {
        report(label.clone(), SchemaError::MissingField("game"));
    }
    if document.turn.is_empty() {
        report(label.clone(), SchemaError::MissingField("turn"));
    } else if let Err(err) = TurnId::parse(&document.turn) {
        report(label.clone(), err);
    }
    if document.clan.is_empty() {
        report(label.clone(), SchemaError::MissingField("clan"));
    } else if let Err(err) = ClanId::parse(&document.clan) {
        report(label.clone(), err);
    }

    for clan in &document.clans {
        if let Err(err) = ClanId::parse(&clan.id) {
            errors.push(Diagnostic::new(format!("{label}: clan {:?}", clan.id), err));
        }
        for unit in &clan.units {
            if let Some(error) = validate_unit(unit) {
                errors.push(Diagnostic::new(
                    format!("{label}: clan {}: unit {:?}", clan.id, unit.id),
                    error,
                ));
            }
        }
    }
}

fn validate_unit(unit: &UnitReport) -> Option<MapError> {
    if unit.id.is_empty() {
        return Some(SchemaError::MissingField("id").into());
    }
    match LinearCoord::parse_grid(&unit.ending) {
        Ok(_) => None,
        Err(CoordinateError::NoLocation) if !unit.has_observations() => None,
        Err(err) => Some(err.into()),
    }
}
