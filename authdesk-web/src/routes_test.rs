//! Tests for the routing system
//!
//! Validates route paths and the redirects applied around the session.

#[cfg(test)]
mod tests {
    use crate::routes::MainRoute;
    use strum::IntoEnumIterator;
    use yew_router::Routable;

    /// Tests route paths
    #[test]
    fn test_route_paths() {
        assert_eq!(MainRoute::Home.to_path(), "/");
        assert_eq!(MainRoute::Login.to_path(), "/login");
        assert_eq!(MainRoute::Register.to_path(), "/register");
        assert_eq!(MainRoute::NotFound.to_path(), "/404");
    }

    /// Tests path recognition
    #[test]
    fn test_route_recognition() {
        assert_eq!(MainRoute::recognize("/login"), Some(MainRoute::Login));
        assert_eq!(MainRoute::recognize("/register"), Some(MainRoute::Register));
        assert_eq!(MainRoute::not_found_route(), Some(MainRoute::NotFound));
    }

    /// Tests that only home is gated on a session
    #[test]
    fn test_guest_redirects() {
        assert_eq!(
            MainRoute::Home.redirect_for(false),
            Some(MainRoute::Login)
        );
        assert_eq!(MainRoute::Login.redirect_for(false), None);
        assert_eq!(MainRoute::Register.redirect_for(false), None);
        assert_eq!(MainRoute::NotFound.redirect_for(false), None);
    }

    /// Tests that a logged-in user skips the login page
    #[test]
    fn test_authenticated_redirects() {
        assert_eq!(MainRoute::Login.redirect_for(true), Some(MainRoute::Home));
        for route in MainRoute::iter().filter(|route| *route != MainRoute::Login) {
            assert_eq!(route.redirect_for(true), None, "{route:?}");
        }
    }
}
