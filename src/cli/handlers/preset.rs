use crate::cli::args::{PresetAction, PresetArgs};
use crate::cli::config::{open_store, read_text, resolve_codec};
use crate::cli::global::GlobalArgs;
use phrase_share::{ShareSettings, count_messages};

pub fn handle(
    args: PresetArgs,
    global: &GlobalArgs,
    settings: &ShareSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(args.store.as_deref(), settings)?;

    match args.action {
        PresetAction::List => {
            let active_id = store.active().id.clone();
            for preset in store.presets() {
                let marker = if preset.id == active_id { "*" } else { " " };
                println!(
                    "{} {:<20} {:>3} messages  {}",
                    marker,
                    preset.name,
                    count_messages(&preset.dialogs),
                    preset.id
                );
            }
            // Nothing changed; leave a missing store file missing
            return Ok(());
        }
        PresetAction::Export { codec } => {
            let kind = match codec {
                Some(name) => resolve_codec(&name)?,
                None => settings.default_codec,
            };
            println!("{}", store.export_active(kind)?);
            if !global.quiet {
                eprintln!("Exported '{}' as {}", store.active().name, kind.label());
            }
            return Ok(());
        }
        PresetAction::Import { file } => {
            let code = read_text(file.as_ref())?;
            let preset = store.import_code(&code)?;
            if !global.quiet {
                eprintln!(
                    "Loaded {} messages into '{}'",
                    count_messages(&preset.dialogs),
                    preset.name
                );
            }
        }
        PresetAction::Reset => {
            let preset = store.reset_active();
            if !global.quiet {
                eprintln!("Reset '{}' to its built-in dialogs", preset.name);
            }
        }
        PresetAction::Select { preset } => {
            let preset = store.select(&preset)?;
            println!("{}", preset.name);
        }
        PresetAction::Add { name } => {
            let preset = store.add_preset(&name);
            println!("{}", preset.id);
        }
        PresetAction::Delete { id } => {
            let removed = store.delete_preset(&id)?;
            if !global.quiet {
                eprintln!("Deleted '{}'", removed.name);
            }
        }
    }

    store.save()?;
    Ok(())
}
