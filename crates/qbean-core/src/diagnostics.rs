//! Diagnostic sink trait

/// Receives progress and problem reports from a generation run.
///
/// `entity` names the entity a message concerns, when there is one.
pub trait Diagnostics {
    fn info(&self, entity: Option<&str>, message: &str);

    fn warn(&self, entity: Option<&str>, message: &str);

    fn error(&self, entity: Option<&str>, message: &str);
}

/// Discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {
    fn info(&self, _entity: Option<&str>, _message: &str) {}

    fn warn(&self, _entity: Option<&str>, _message: &str) {}

    fn error(&self, _entity: Option<&str>, _message: &str) {}
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    fn info(&self, entity: Option<&str>, message: &str) {
        (**self).info(entity, message);
    }

    fn warn(&self, entity: Option<&str>, message: &str) {
        (**self).warn(entity, message);
    }

    fn error(&self, entity: Option<&str>, message: &str) {
        (**self).error(entity, message);
    }
}
