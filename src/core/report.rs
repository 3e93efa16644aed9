use crate::core::ranking::RankedShops;
use crate::models::{MasterEntry, ScoredShop, Shop};

/// Message returned when the upstream search matched nothing
pub const NO_MATCHES_MESSAGE: &str =
    "No restaurants matched the search criteria. Try changing the search conditions.";

/// Human labels for the amenities a shop offers, in fixed display order
pub fn shop_features(shop: &Shop) -> Vec<&'static str> {
    let mut features = Vec::new();
    if shop.has_private_room() {
        features.push("Private rooms");
    }
    if shop.has_wifi() {
        features.push("Wi-Fi");
    }
    if shop.has_free_drink() {
        features.push("All-you-can-drink");
    }
    if shop.has_free_food() {
        features.push("All-you-can-eat");
    }
    if shop.has_lunch() {
        features.push("Lunch");
    }
    if shop.open_past_midnight() {
        features.push("Open after 23:00");
    }
    if shop.has_parking() {
        features.push("Parking");
    }
    if shop.accepts_card() {
        features.push("Cards accepted");
    }
    features
}

/// Render one ranked shop as a markdown block. Absent fields are omitted
/// entirely, never shown as empty.
fn format_shop(entry: &ScoredShop, rank: usize) -> String {
    let shop = &entry.shop;
    let mut lines = Vec::new();

    lines.push(format!("## {}. {}", rank, shop.name));
    lines.push(String::new());
    lines.push(format!("**Genre**: {}", shop.genre.name));
    lines.push(format!("**Address**: {}", shop.address));
    lines.push(format!("**Access**: {}", shop.access));

    if let Some(budget) = &shop.budget {
        if let Some(name) = budget.name.as_deref().filter(|name| !name.is_empty()) {
            let average = budget
                .average
                .as_deref()
                .filter(|avg| !avg.is_empty())
                .map(|avg| format!(" (average: {})", avg))
                .unwrap_or_default();
            lines.push(format!("**Budget**: {}{}", name, average));
        }
    }

    if let Some(open) = shop.open.as_deref().filter(|open| !open.is_empty()) {
        lines.push(format!("**Hours**: {}", open));
    }
    if let Some(tagline) = shop.catch.as_deref().filter(|tagline| !tagline.is_empty()) {
        lines.push(format!("**Tagline**: {}", tagline));
    }

    let features = shop_features(shop);
    if !features.is_empty() {
        lines.push(format!("**Features**: {}", features.join(", ")));
    }

    if let Some(capacity) = shop.capacity {
        lines.push(format!("**Capacity**: {} seats", capacity));
    }
    lines.push(format!("**URL**: {}", shop.urls.pc));
    if let Some(photo) = shop.photo_url() {
        lines.push(format!("**Photo**: {}", photo));
    }

    lines.join("\n")
}

/// Render the ranked list as a markdown report
pub fn render_ranked(ranked: &RankedShops, title: &str, capacity_aware: bool) -> String {
    let shown = ranked.shops.len();

    let mut lines = vec![
        format!("# {} TOP{}", title, shown),
        String::new(),
        format!(
            "**Showing {} of {} matches, ranked by recommendation**",
            shown, ranked.total_fetched
        ),
        String::new(),
    ];

    if capacity_aware {
        lines.push(
            "_Ranking considers seating capacity, all-you-can-drink plans, private rooms and other amenities._"
                .to_string(),
        );
        lines.push(String::new());
    }

    lines.push("---".to_string());
    lines.push(String::new());

    let blocks: Vec<String> = ranked
        .shops
        .iter()
        .enumerate()
        .map(|(index, entry)| format_shop(entry, index + 1))
        .collect();
    lines.push(blocks.join("\n\n---\n\n"));

    lines.join("\n")
}

/// Render a master-data list as a two-column code table
pub fn render_master_table(
    title: &str,
    description: &str,
    code_header: &str,
    name_header: &str,
    entries: &[MasterEntry],
) -> String {
    let mut lines = vec![
        format!("# {}", title),
        String::new(),
        description.to_string(),
        String::new(),
        format!("| {} | {} |", code_header, name_header),
        "|--------|----------|".to_string(),
    ];

    for entry in entries {
        lines.push(format!("| {} | {} |", entry.code, entry.name));
    }

    lines.join("\n")
}
