use dioxus::prelude::*;
use shared_types::{LayoutShell, Role, SessionUser};

/// Where the session lookup currently stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionStatus {
    /// The session service has not answered yet.
    #[default]
    Resolving,
    SignedOut,
    SignedIn(SessionUser),
}

/// Session state provided once at the app root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionContext {
    pub status: Signal<SessionStatus>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            status: Signal::new(SessionStatus::Resolving),
        }
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        match &*self.status.read() {
            SessionStatus::SignedIn(user) => Some(user.clone()),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(*self.status.read(), SessionStatus::Resolving)
    }

    pub fn role(&self) -> Option<Role> {
        match &*self.status.read() {
            SessionStatus::SignedIn(user) => Some(user.role),
            _ => None,
        }
    }

    /// Shell for the signed-in role, customer when nobody is signed in.
    pub fn shell(&self) -> LayoutShell {
        self.role()
            .map(LayoutShell::for_role)
            .unwrap_or(LayoutShell::Customer)
    }

    pub fn sign_in(&mut self, user: SessionUser) {
        self.status.set(SessionStatus::SignedIn(user));
    }

    pub fn sign_out(&mut self) {
        self.status.set(SessionStatus::SignedOut);
    }

    /// Settle the status from a session lookup. Keeps an existing sign-in
    /// when the lookup finds the same user.
    pub fn resolve(&mut self, user: Option<SessionUser>) {
        let next = match user {
            Some(user) => SessionStatus::SignedIn(user),
            None => SessionStatus::SignedOut,
        };
        if *self.status.peek() != next {
            self.status.set(next);
        }
    }
}

/// Hook to access the session context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::DEMO_ACCOUNTS;

    fn empty_app() -> Element {
        rsx! {}
    }

    /// Run `f` inside the root scope of a freshly built app so signals can be created.
    fn with_session<T>(f: impl FnOnce(SessionContext) -> T) -> T {
        let mut dom = VirtualDom::new(empty_app);
        dom.rebuild_in_place();
        dom.in_scope(ScopeId::ROOT, || f(SessionContext::new()))
    }

    #[test]
    fn starts_loading_with_no_user() {
        with_session(|session| {
            assert!(session.is_loading());
            assert_eq!(session.current_user(), None);
            assert_eq!(session.role(), None);
        });
    }

    #[test]
    fn resolving_to_nobody_signs_out() {
        with_session(|mut session| {
            session.resolve(None);
            assert!(!session.is_loading());
            assert_eq!(*session.status.peek(), SessionStatus::SignedOut);
        });
    }

    #[test]
    fn resolve_keeps_an_identical_sign_in() {
        with_session(|mut session| {
            let user = DEMO_ACCOUNTS[1].to_session_user();
            session.sign_in(user.clone());
            session.resolve(Some(user.clone()));
            assert_eq!(session.current_user(), Some(user));
            assert_eq!(session.role(), Some(Role::Agent));

            session.sign_out();
            assert_eq!(session.current_user(), None);
            assert!(!session.is_loading());
        });
    }

    #[test]
    fn shell_defaults_to_customer() {
        with_session(|mut session| {
            assert_eq!(session.shell(), LayoutShell::Customer);
            session.resolve(Some(DEMO_ACCOUNTS[0].to_session_user()));
            assert_eq!(session.shell(), LayoutShell::Admin);
        });
    }
}
