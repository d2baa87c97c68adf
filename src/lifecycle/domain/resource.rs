//! Contract implemented by resource types managed by the lifecycle core.

/// A REST-managed resource orchestrated by the lifecycle service.
///
/// Implementations supply the resource-specific pieces the generic
/// orchestrator needs: identifier access, create-time defaulting, typed
/// filter matching, and field-level projection and presence checks. One
/// implementation exists per resource type; the orchestration logic is
/// never duplicated per collection.
pub trait Resource: Clone + Send + Sync + 'static {
    /// Typed conjunctive filter for list queries.
    type Filter: Send + Sync;

    /// Collection name used in error and log messages.
    const COLLECTION: &'static str;

    /// Returns the resource identifier, when present.
    fn id(&self) -> Option<&str>;

    /// Applies create-time defaults to attributes the client omitted.
    fn apply_defaults(&mut self);

    /// Reports whether this instance satisfies every populated condition
    /// in `filter`.
    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Returns a copy narrowed to the requested field subset.
    ///
    /// The identifier is always carried and unknown field names are
    /// ignored. Projection never mutates the source instance.
    #[must_use]
    fn project(&self, fields: &[String]) -> Self;

    /// Reports whether the named attribute carries client-supplied state
    /// (a value or an explicit null).
    fn has_field(&self, field: &str) -> bool;
}
