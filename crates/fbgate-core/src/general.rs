/// Decides whether a Facebook user may reach protected handlers.
pub trait RegistrationCheck: Send + Sync + 'static {
    fn is_registered(&self, user_id: &str) -> bool;
}

impl<F> RegistrationCheck for F
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    fn is_registered(&self, user_id: &str) -> bool {
        self(user_id)
    }
}
