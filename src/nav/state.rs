use crate::flow::FlowState;
use crate::session::SessionState;

/// The screen the presentation layer should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Login,
    SignUp,
    /// Main authenticated surface.
    Authenticated,
    /// Profile menu over the authenticated surface.
    Menu,
    SubScreen(SubScreenKind),
}

/// Static pages reachable from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubScreenKind {
    Subscriptions,
    Contact,
    About,
    Settings,
}

/// Which unauthenticated surface the user last chose. Local UI navigation,
/// not derived from the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthSurface {
    #[default]
    Login,
    SignUp,
}

/// A pushed level inside the authenticated area. The main surface is the
/// implicit bottom of the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaScreen {
    Menu,
    Sub(SubScreenKind),
}

/// Local navigation state: sequence completion flags plus stack position.
///
/// Holds no session data; combining it with [`SessionState`] through
/// [`screen_for`] is the only way a screen is ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavState {
    /// Terminal splash action has fired. Until then nothing else shows.
    pub splash_complete: bool,
    /// Terminal celebration action has fired. Gates entry into the
    /// authenticated area after a successful login.
    pub celebration_complete: bool,
    pub auth_surface: AuthSurface,
    /// Pushed levels inside the authenticated area, bottom first.
    pub area_stack: Vec<AreaScreen>,
}

impl FlowState for NavState {}

/// Derive the active screen. Pure; rules apply in priority order.
pub fn screen_for(session: &SessionState, nav: &NavState) -> Screen {
    if !nav.splash_complete {
        return Screen::Splash;
    }
    match session {
        SessionState::Authenticated { .. } => {
            if !nav.celebration_complete {
                // Success feedback still playing on the login surface.
                return Screen::Login;
            }
            match nav.area_stack.last() {
                None => Screen::Authenticated,
                Some(AreaScreen::Menu) => Screen::Menu,
                Some(AreaScreen::Sub(kind)) => Screen::SubScreen(*kind),
            }
        }
        SessionState::Unauthenticated
        | SessionState::Authenticating
        | SessionState::Failed { .. } => match nav.auth_surface {
            AuthSurface::Login => Screen::Login,
            AuthSurface::SignUp => Screen::SignUp,
        },
    }
}
