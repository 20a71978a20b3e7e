use crate::flow::Reducer;
use crate::nav::intent::NavIntent;
use crate::nav::state::{AreaScreen, AuthSurface, NavState};

pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavState;
    type Intent = NavIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NavIntent::SplashFinished => NavState {
                splash_complete: true,
                ..state
            },
            NavIntent::CelebrationFinished => NavState {
                celebration_complete: true,
                ..state
            },
            NavIntent::ShowSignUp => NavState {
                auth_surface: AuthSurface::SignUp,
                ..state
            },
            NavIntent::BackToLogin => NavState {
                auth_surface: AuthSurface::Login,
                ..state
            },
            NavIntent::OpenMenu => {
                // The menu opens from the main surface only.
                if state.area_stack.is_empty() {
                    let mut next = state;
                    next.area_stack.push(AreaScreen::Menu);
                    next
                } else {
                    state
                }
            }
            NavIntent::OpenSubScreen(kind) => {
                if state.area_stack.last() == Some(&AreaScreen::Menu) {
                    let mut next = state;
                    next.area_stack.push(AreaScreen::Sub(kind));
                    next
                } else {
                    state
                }
            }
            NavIntent::Back => {
                let mut next = state;
                next.area_stack.pop();
                next
            }
            NavIntent::SignedOut => NavState {
                // Splash stays done; the celebration must replay on the
                // next successful login.
                splash_complete: state.splash_complete,
                ..NavState::default()
            },
        }
    }
}
