use super::auth_model::UserIdentity;

/// Trait for the opaque authentication collaborator.
///
/// The investor store reads the current identity before every remote
/// operation; the embedder is expected to call `refresh()` on the store
/// whenever the identity changes (sign-in, sign-out).
pub trait AuthProviderTrait: Send + Sync {
    /// Returns the currently signed-in user, if any.
    fn current_user(&self) -> Option<UserIdentity>;
}
