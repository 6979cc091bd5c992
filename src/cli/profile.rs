/// `habitkeep profile` - display name, onboarding, color scheme, premium

use clap::Subcommand;

use habitkeep::{iap, AppError, ColorScheme, HabitApp};

#[derive(Subcommand, Debug)]
pub enum ProfileAction {
    /// Show the current profile settings
    Show,
    /// Finish onboarding as the named user
    Onboard { name: String },
    /// Clear the onboarding state and stored name
    ResetOnboarding,
    /// Set the color scheme: light, dark, toggle, or system
    Scheme { value: SchemeArg },
    /// Attempt to purchase the premium subscription
    Upgrade,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum SchemeArg {
    Light,
    Dark,
    Toggle,
    System,
}

pub async fn run(app: &mut HabitApp, action: Option<ProfileAction>) -> Result<(), AppError> {
    match action.unwrap_or(ProfileAction::Show) {
        ProfileAction::Show => show(app).await,
        ProfileAction::Onboard { name } => {
            app.prefs_mut().complete_onboarding(&name).await;
            if app.prefs().is_onboarded() {
                println!("Welcome, {}!", app.prefs().user_name().unwrap_or_default());
            } else {
                println!("A non-empty name is required to finish onboarding");
            }
        }
        ProfileAction::ResetOnboarding => {
            app.prefs_mut().reset_onboarding().await;
            println!("Onboarding state cleared");
        }
        ProfileAction::Scheme { value } => {
            let prefs = app.prefs_mut();
            match value {
                SchemeArg::Light => prefs.set_color_scheme(ColorScheme::Light).await,
                SchemeArg::Dark => prefs.set_color_scheme(ColorScheme::Dark).await,
                SchemeArg::Toggle => {
                    prefs.toggle_color_scheme().await;
                }
                SchemeArg::System => prefs.follow_system_scheme().await,
            }
            match app.prefs().color_scheme() {
                Some(scheme) => println!("Color scheme set to {}", scheme.as_str()),
                None => println!("Color scheme follows the system"),
            }
        }
        ProfileAction::Upgrade => match iap::purchase_premium().await {
            Ok(()) => println!("Premium unlocked"),
            Err(e) => println!("{}", e),
        },
    }
    Ok(())
}

async fn show(app: &HabitApp) {
    match app.prefs().user_name() {
        Some(name) => println!("Name:         {}", name),
        None => println!("Name:         (not set)"),
    }
    println!(
        "Onboarded:    {}",
        if app.prefs().is_onboarded() { "yes" } else { "no" }
    );
    match app.prefs().color_scheme() {
        Some(scheme) => println!("Color scheme: {}", scheme.as_str()),
        None => println!("Color scheme: system"),
    }
    println!(
        "Premium:      {}",
        if iap::is_premium(app.gateway()).await {
            "active"
        } else {
            "inactive"
        }
    );
}
