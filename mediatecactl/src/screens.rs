//! The five catalog screens.
//!
//! Each screen instantiates the generic controller for its kind and loops a
//! list/add/edit/delete menu until the operator goes back. Screens re-render
//! from controller state only; a failed intent prints the error and leaves
//! the state exactly as the controller reports it.

use std::sync::Arc;

use anyhow::Result;
use chrono::{Datelike, TimeZone, Utc};
use dialoguer::{Confirm, Input, Select};
use mediateca_client::{
    ApiClient, EntityController, OptionEntry, OptionsResolver, RestGateway,
};
use mediateca_model::prelude::*;

const ACTIONS: [&str; 5] = ["List", "Add", "Edit", "Delete", "Back to menu"];

async fn run_screen<T, F>(
    client: &ApiClient,
    title: &str,
    mut fill: F,
    render: fn(&T) -> String,
) -> Result<()>
where
    T: CatalogResource,
    F: FnMut(&mut T::Draft) -> Result<()>,
{
    let gateway = Arc::new(RestGateway::<T>::new(client.clone()));
    let mut controller = EntityController::new(gateway);
    if let Err(err) = controller.load().await {
        eprintln!("{err}");
    }

    loop {
        let choice = Select::new()
            .with_prompt(title)
            .items(&ACTIONS)
            .default(0)
            .interact()?;
        match choice {
            0 => {
                if controller.collection().is_empty() {
                    println!("(no records)");
                }
                for record in controller.collection() {
                    println!("  {}", render(record));
                }
            }
            1 => {
                controller.begin_create();
                fill(controller.draft_mut())?;
                match controller.submit().await {
                    Ok(()) => println!("Created."),
                    Err(err) => eprintln!("{err}"),
                }
            }
            2 => {
                let Some(id) = pick_record(&controller)? else {
                    continue;
                };
                controller.begin_edit(&id)?;
                fill(controller.draft_mut())?;
                match controller.submit().await {
                    Ok(()) => println!("Updated."),
                    Err(err) => eprintln!("{err}"),
                }
            }
            3 => {
                let Some(id) = pick_record(&controller)? else {
                    continue;
                };
                match controller.remove(&id).await {
                    Ok(()) => println!("Deleted."),
                    Err(err) => eprintln!("{err}"),
                }
            }
            _ => return Ok(()),
        }
    }
}

fn pick_record<T: CatalogResource>(
    controller: &EntityController<T>,
) -> Result<Option<EntityId>> {
    if controller.collection().is_empty() {
        println!("(no records)");
        return Ok(None);
    }
    let labels: Vec<String> = controller
        .collection()
        .iter()
        .map(|r| format!("{} ({})", r.display_name(), r.id()))
        .collect();
    let idx = Select::new()
        .with_prompt("Pick a record")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Some(controller.collection()[idx].id().clone()))
}

fn prompt_text(prompt: &str, current: &str) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(prompt)
        .default(current.to_string())
        .allow_empty(true)
        .interact_text()?)
}

fn pick_reference(
    prompt: &str,
    entries: &[OptionEntry],
    current: &EntityId,
) -> Result<EntityId> {
    if entries.is_empty() {
        // A failed options fetch degrades this selector to "no options".
        println!("{prompt}: no options available");
        return Ok(current.clone());
    }
    let labels: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    let default = entries.iter().position(|e| &e.id == current).unwrap_or(0);
    let idx = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(entries[idx].id.clone())
}

pub async fn genres(client: &ApiClient) -> Result<()> {
    run_screen::<Genre, _>(
        client,
        "Genres",
        |draft| {
            draft.name = prompt_text("Name", &draft.name)?;
            draft.description = prompt_text("Description", &draft.description)?;
            draft.active = Confirm::new()
                .with_prompt("Active?")
                .default(draft.active)
                .interact()?;
            Ok(())
        },
        |g| {
            format!(
                "{} [{}] {} (updated {})",
                g.name,
                if g.active { "active" } else { "inactive" },
                g.description,
                g.updated_at.format("%Y-%m-%d"),
            )
        },
    )
    .await
}

pub async fn directors(client: &ApiClient) -> Result<()> {
    run_screen::<Director, _>(
        client,
        "Directors",
        |draft| {
            draft.name = prompt_text("Name", &draft.name)?;
            draft.active = Confirm::new()
                .with_prompt("Active?")
                .default(draft.active)
                .interact()?;
            Ok(())
        },
        |d| {
            format!(
                "{} [{}] (updated {})",
                d.name,
                if d.active { "active" } else { "inactive" },
                d.updated_at.format("%Y-%m-%d"),
            )
        },
    )
    .await
}

pub async fn producers(client: &ApiClient) -> Result<()> {
    run_screen::<Producer, _>(
        client,
        "Producers",
        |draft| {
            draft.name = prompt_text("Name", &draft.name)?;
            draft.slogan = prompt_text("Slogan", &draft.slogan)?;
            draft.description = prompt_text("Description", &draft.description)?;
            Ok(())
        },
        |p| {
            format!(
                "{} \"{}\" {} (updated {})",
                p.name,
                p.slogan,
                p.description,
                p.updated_at.format("%Y-%m-%d"),
            )
        },
    )
    .await
}

pub async fn types(client: &ApiClient) -> Result<()> {
    run_screen::<MediaType, _>(
        client,
        "Types",
        |draft| {
            draft.name = prompt_text("Name", &draft.name)?;
            draft.description = prompt_text("Description", &draft.description)?;
            draft.active = Confirm::new()
                .with_prompt("Active?")
                .default(draft.active)
                .interact()?;
            Ok(())
        },
        |t| {
            format!(
                "{} [{}] {} (updated {})",
                t.name,
                if t.active { "active" } else { "inactive" },
                t.description,
                t.updated_at.format("%Y-%m-%d"),
            )
        },
    )
    .await
}

pub async fn media(client: &ApiClient) -> Result<()> {
    // The four reference dropdowns are fetched once, together, before the
    // form is usable.
    let options = OptionsResolver::new(client).load().await;

    run_screen::<Media, _>(
        client,
        "Media",
        move |draft| {
            draft.serial = prompt_text("Serial", &draft.serial)?;
            draft.title = prompt_text("Title", &draft.title)?;
            draft.synopsis = prompt_text("Synopsis", &draft.synopsis)?;
            draft.producer = pick_reference("Producer", &options.producers, &draft.producer)?;
            draft.media_type = pick_reference("Type", &options.types, &draft.media_type)?;
            draft.director = pick_reference("Director", &options.directors, &draft.director)?;
            draft.genre = pick_reference("Genre", &options.genres, &draft.genre)?;
            let image = prompt_text("Image URL (empty for none)", draft.image.as_deref().unwrap_or(""))?;
            draft.image = if image.trim().is_empty() { None } else { Some(image) };
            draft.movie_url = prompt_text("Movie URL", &draft.movie_url)?;
            let year: i32 = Input::new()
                .with_prompt("Release year")
                .default(draft.released_at.year())
                .interact_text()?;
            if let Some(date) = Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).single() {
                draft.released_at = date;
            }
            Ok(())
        },
        |m| {
            format!(
                "{} ({}) {} (updated {})",
                m.title,
                m.release_year(),
                m.movie_url,
                m.updated_at.format("%Y-%m-%d"),
            )
        },
    )
    .await
}
