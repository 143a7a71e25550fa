use catalog_dashboard::catalog::SortOrder;
use catalog_dashboard::config::CatalogConfig;
use catalog_dashboard::dashboard::Dashboard;
use catalog_dashboard::lifecycle::{setup_tracing, CatalogSystem, SystemError};
use catalog_dashboard::model::{ProductDraft, ProductId};
use catalog_dashboard::repository::{ProductRepository, SessionContext};
use tracing::{info, warn, Instrument};

fn seed() -> Vec<ProductDraft> {
    vec![
        ProductDraft::new("Chair", 50.0, "Furniture"),
        ProductDraft::new("Table", 30.0, "Furniture").favorite(true),
        ProductDraft::new("Lamp", 20.0, "Lighting"),
        ProductDraft::new("Floor Lamp", 65.0, "Lighting").favorite(true),
        ProductDraft::new("Bookshelf", 120.0, "Furniture"),
        ProductDraft::new("Desk Lamp", 20.0, "Lighting"),
        ProductDraft::new("Gift Card", 25.0, ""),
    ]
}

fn show(label: &str, dashboard: &Dashboard) {
    let page = dashboard.view();
    let items: Vec<String> = page
        .items
        .iter()
        .map(|p| format!("{} ({})", p.name, p.price))
        .collect();
    info!(
        label,
        page = page.current_page,
        total_pages = page.total_pages,
        matches = page.total_matches,
        ?items,
        "View"
    );
    if let Some(message) = dashboard.empty_message() {
        info!(label, "{message}");
    }
}

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    setup_tracing();

    let config = CatalogConfig::from_env()?;
    info!(?config, "Starting catalog dashboard demo");
    let system = CatalogSystem::new(config);

    let session = system.sessions.open("alice");
    let span = tracing::info_span!("seeding");
    async {
        for draft in seed() {
            system.repository.create(&session, draft).await?;
        }
        Ok::<_, SystemError>(())
    }
    .instrument(span)
    .await?;

    // Somebody else's product never shows up on alice's dashboard.
    let bob = system.sessions.open("bob");
    system
        .repository
        .create(&bob, ProductDraft::new("Armchair", 90.0, "Furniture"))
        .await?;

    let mut anonymous = system.dashboard();
    anonymous
        .mount(&system.repository, &SessionContext::anonymous())
        .await;
    if let Some(message) = anonymous.error_message() {
        warn!(error = message, "Anonymous dashboard");
    }

    let mut dashboard = system.dashboard();
    dashboard.mount(&system.repository, &session).await;
    info!(categories = ?dashboard.categories(), "Categories");
    show("initial", &dashboard);

    dashboard.go_to_page(2);
    show("page 2", &dashboard);

    dashboard.search("lamp");
    show("search 'lamp'", &dashboard);

    dashboard.sort_by_price(SortOrder::Descending);
    show("lamps by price desc", &dashboard);

    dashboard.search("");
    dashboard.select_category("Furniture");
    dashboard.toggle_favorites_only();
    show("favorite furniture", &dashboard);

    // Local only: the repository still has Table as a favorite.
    dashboard.toggle_favorite(ProductId(2));
    show("after un-favoriting Table", &dashboard);

    let stored = system.repository.fetch_one(&session, ProductId(2)).await?;
    info!(is_favorite = stored.is_favorite, "Table as stored");

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
