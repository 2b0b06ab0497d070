//! One flow per subcommand: load the remote collection, apply the operation,
//! re-render, confirm.

use crate::args::Commands;
use crate::client::{CliError, Remote};
use crate::render;
use crate::state::{Inventory, ProductDraft, ProductPatch};

pub async fn dispatch(remote: &Remote, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::List => list(remote).await,
        Commands::Add {
            name,
            category,
            quantity,
            price,
        } => {
            add(
                remote,
                ProductDraft {
                    name,
                    category,
                    quantity,
                    price,
                },
            )
            .await
        }
        Commands::Update {
            id,
            name,
            category,
            quantity,
            price,
        } => {
            update(
                remote,
                &id,
                ProductPatch {
                    name,
                    category,
                    quantity,
                    price,
                },
            )
            .await
        }
        Commands::Remove { id } => remove(remote, &id).await,
        Commands::Find { query } => find(remote, &query).await,
    }
}

async fn list(remote: &Remote) -> Result<(), CliError> {
    let mut inventory = Inventory::new();
    inventory.load(remote).await;
    print!("{}", render::table(inventory.products()));
    Ok(())
}

async fn add(remote: &Remote, draft: ProductDraft) -> Result<(), CliError> {
    let mut inventory = Inventory::new();
    inventory.load(remote).await;
    let added = inventory.add(remote, draft).await?;
    print!("{}", render::table(inventory.products()));
    println!("Product added with id {}", added.id);
    Ok(())
}

async fn update(remote: &Remote, id: &str, patch: ProductPatch) -> Result<(), CliError> {
    let mut inventory = Inventory::new();
    inventory.load(remote).await;
    let updated = inventory.update_by_id(remote, id, patch).await?;
    print!("{}", render::table(inventory.products()));
    println!("Product {} updated", updated.id);
    Ok(())
}

async fn remove(remote: &Remote, id: &str) -> Result<(), CliError> {
    let mut inventory = Inventory::new();
    inventory.load(remote).await;
    let removed = inventory.delete_by_id(remote, id).await?;
    print!("{}", render::table(inventory.products()));
    println!("Product {} removed", removed.id);
    Ok(())
}

async fn find(remote: &Remote, query: &str) -> Result<(), CliError> {
    let mut inventory = Inventory::new();
    inventory.load(remote).await;
    let matches: Vec<_> = inventory.find(query).into_iter().cloned().collect();
    if matches.is_empty() {
        println!("No products matched `{query}`");
    } else {
        print!("{}", render::table(&matches));
    }
    Ok(())
}
