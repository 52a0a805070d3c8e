use crate::commands::*;
use crate::output::*;
use notification_center::driver::{lock, shared, ExpiryDriver};
use notification_center::{
    ExpiryPolicy, NotificationCenter, NotificationRequest, NotificationSettings,
    NotificationStatus, SequentialIds,
};
use std::path::Path;
use unindo_gui::{run_gui, GuiConfig};

pub fn handle_command(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings(cli.config.as_deref())?;
    match cli.command {
        None | Some(Commands::Gui) => {
            run_gui(GuiConfig::default(), settings)?;
        }
        Some(Commands::Demo {
            timeout_ms,
            policy,
            status,
            description,
            titles,
        }) => {
            let settings = override_settings(settings, timeout_ms, policy)?;
            run_demo(&settings, status, description.as_deref(), &titles)?;
        }
    }
    Ok(())
}

fn load_settings(path: Option<&Path>) -> Result<NotificationSettings, Box<dyn std::error::Error>> {
    match path {
        Some(path) => NotificationSettings::load_from_file(path).map_err(|err| {
            Box::<dyn std::error::Error>::from(format!(
                "Failed to load settings file '{}': {err}",
                path.display()
            ))
        }),
        None => Ok(NotificationSettings::default()),
    }
}

fn override_settings(
    mut settings: NotificationSettings,
    timeout_ms: Option<u64>,
    policy: Option<ExpiryPolicy>,
) -> Result<NotificationSettings, Box<dyn std::error::Error>> {
    if let Some(timeout_ms) = timeout_ms {
        settings.timeout_ms = timeout_ms;
    }
    if let Some(policy) = policy {
        settings.policy = policy;
    }
    Ok(settings.normalize()?)
}

fn run_demo(
    settings: &NotificationSettings,
    status: Option<NotificationStatus>,
    description: Option<&str>,
    titles: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    runtime.block_on(async {
        let center = shared(NotificationCenter::with_ids(SequentialIds::default()));
        let mut driver = ExpiryDriver::new(center.clone(), settings);
        for title in titles {
            let mut request = NotificationRequest::new(title.as_str());
            if let Some(description) = description {
                request = request.description(description);
            }
            if let Some(status) = status {
                request = request.status(status);
            }
            driver.show(request);
        }
        for item in lock(&center).items() {
            print_notification(item);
        }
        log::info!(
            "waiting for {} notifications to expire ({} ms, {:?})",
            titles.len(),
            settings.timeout_ms,
            settings.policy
        );
        driver.run_until_empty(print_expired).await;
        print_active(lock(&center).len());
    });
    Ok(())
}
