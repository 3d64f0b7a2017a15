//! Register command - drives one registration form session.

use crate::commands::participants;
use crate::config::Config;
use crate::error::AppResult;
use registration::{Navigator, RegistrationController, SubmitError};
use registry_client::{Bootcamp, RegistryClient};
use submission_store::FileFlagStore;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

const USAGE: &str =
    "usage: bitup register <full-name> <discord-user> <email> <motivation> <bootcamp>...";

/// Navigator that records the controller's screen-transition request so the
/// command can show the participants listing after a success.
#[derive(Clone, Default)]
struct ListingNavigator {
    requested: Arc<AtomicBool>,
}

impl ListingNavigator {
    fn requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }
}

impl Navigator for ListingNavigator {
    fn on_registered(&self) {
        info!("Navigation requested: participants listing");
        self.requested.store(true, Ordering::SeqCst);
    }
}

pub async fn run(client: RegistryClient, config: &Config, args: &[String]) -> AppResult<()> {
    if args.len() < 5 {
        println!("{USAGE}");
        return Ok(());
    }

    let store = FileFlagStore::new(&config.store.path);
    let navigator = ListingNavigator::default();
    let mut controller = RegistrationController::open(
        client.clone(),
        Box::new(store),
        Box::new(navigator.clone()),
    )
    .await?;

    if controller.already_registered() {
        println!("You are already registered. One registration per participant.");
        return Ok(());
    }

    controller.set_full_name(&args[0]);
    controller.set_discord_user(&args[1]);
    controller.set_email(&args[2]);
    controller.set_motivation(&args[3]);

    for raw in &args[4..] {
        match Bootcamp::parse(raw) {
            Some(bootcamp) => controller.toggle_bootcamp(bootcamp),
            None => {
                println!("Unknown bootcamp '{raw}'. Available: Frontend, Backend.");
                return Ok(());
            }
        }
    }

    match controller.submit().await {
        Ok(()) => {
            println!("Registration submitted!");
            if navigator.requested() {
                participants::run(&client).await?;
            }
            Ok(())
        }
        Err(SubmitError::Validation(rule)) => {
            println!("{rule}");
            Ok(())
        }
        Err(SubmitError::AlreadyRegistered) => {
            println!("You are already registered. One registration per participant.");
            Ok(())
        }
        Err(SubmitError::Registry(_)) => {
            // Uniform over transport failures and rejections; the form
            // values are preserved for a manual retry.
            println!("Registration could not be submitted. Please try again.");
            Ok(())
        }
        Err(SubmitError::Store(e)) => Err(e.into()),
    }
}
