use crate::flow::Intent;
use crate::nav::state::SubScreenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    /// Terminal action of the splash sequence fired.
    SplashFinished,
    /// Terminal action of the celebration sequence fired.
    CelebrationFinished,
    /// User chose the signup surface from login.
    ShowSignUp,
    /// Back to the login surface (explicit link or signup hand-back).
    BackToLogin,
    /// Open the profile menu from the main authenticated surface.
    OpenMenu,
    /// Open a static page. Only valid from the menu.
    OpenSubScreen(SubScreenKind),
    /// Pop one level of the authenticated-area stack.
    Back,
    /// Session ended; reset everything gated on it.
    SignedOut,
}

impl Intent for NavIntent {}
