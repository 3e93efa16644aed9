use rmcp::model::Tool;
use serde_json::json;
use std::sync::Arc;

/// Genre codes published by the web service, embedded in the tool schema so
/// callers can filter without a round trip to `get_genres`.
pub const GENRE_CODES: &[(&str, &str)] = &[
    ("G001", "居酒屋"),
    ("G002", "ダイニングバー・バル"),
    ("G003", "創作料理"),
    ("G004", "和食"),
    ("G005", "洋食"),
    ("G006", "イタリアン・フレンチ"),
    ("G007", "中華"),
    ("G008", "焼肉・ホルモン"),
    ("G009", "韓国料理"),
    ("G010", "各国料理"),
    ("G011", "カラオケ・パーティ"),
    ("G012", "バー・カクテル"),
    ("G013", "ラーメン"),
    ("G014", "お好み焼き・もんじゃ"),
    ("G015", "カフェ・スイーツ"),
    ("G016", "その他グルメ"),
    ("G017", "その他"),
];

/// Budget codes, ordered by price band as the web service documents them
pub const BUDGET_CODES: &[(&str, &str)] = &[
    ("B009", "～500円"),
    ("B010", "501～1000円"),
    ("B011", "1001～1500円"),
    ("B001", "1501～2000円"),
    ("B002", "2001～3000円"),
    ("B003", "3001～4000円"),
    ("B008", "4001～5000円"),
    ("B004", "5001～7000円"),
    ("B005", "7001～10000円"),
    ("B006", "10001～15000円"),
    ("B012", "15001～20000円"),
    ("B013", "20001～30000円"),
    ("B014", "30001円～"),
];

fn code_list(codes: &[(&str, &str)]) -> String {
    codes
        .iter()
        .map(|(code, name)| format!("{} ({})", code, name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn make_tool(name: &'static str, description: String, schema: serde_json::Value) -> Tool {
    let serde_json::Value::Object(schema) = schema else {
        panic!("tool schema for {} must be a JSON object", name);
    };

    Tool {
        name: name.into(),
        title: None,
        description: Some(description.into()),
        input_schema: Arc::new(schema),
        output_schema: None,
        annotations: None,
        icons: None,
    }
}

/// The fixed tool catalog served to MCP clients
pub fn tool_catalog() -> Vec<Tool> {
    vec![
        make_tool(
            "search_restaurants",
            "Search for restaurants through the HotPepper gourmet API. Supports keyword, \
             location, genre, budget and amenity filters; results are re-ranked by seating \
             capacity fit and amenities."
                .to_string(),
            json!({
                "type": "object",
                "properties": {
                    "keyword": {
                        "type": "string",
                        "description": "Free-text search keyword (shop name, address, station name, ...)"
                    },
                    "lat": {
                        "type": "number",
                        "description": "Latitude of the search center (for location-based search)"
                    },
                    "lng": {
                        "type": "number",
                        "description": "Longitude of the search center (for location-based search)"
                    },
                    "range": {
                        "type": "number",
                        "description": "Search radius: 1=300m, 2=500m, 3=1000m (default), 4=2000m, 5=3000m",
                        "enum": [1, 2, 3, 4, 5]
                    },
                    "genre": {
                        "type": "string",
                        "description": format!("Genre code: {}", code_list(GENRE_CODES))
                    },
                    "budget": {
                        "type": "string",
                        "description": format!("Budget code: {}", code_list(BUDGET_CODES))
                    },
                    "party_capacity": {
                        "type": "number",
                        "description": "Party size; prefers shops that can seat at least this many people"
                    },
                    "special": {
                        "type": "string",
                        "description": "Special-feature code for occasion-based search (year-end parties, welcome parties, ...). Use get_specials for the full list."
                    },
                    "private_room": { "type": "boolean", "description": "Only shops with private rooms" },
                    "wifi": { "type": "boolean", "description": "Only shops with Wi-Fi" },
                    "free_drink": { "type": "boolean", "description": "Only shops with all-you-can-drink plans" },
                    "free_food": { "type": "boolean", "description": "Only shops with all-you-can-eat plans" },
                    "lunch": { "type": "boolean", "description": "Only shops serving lunch" },
                    "midnight": { "type": "boolean", "description": "Only shops open past 23:00" },
                    "parking": { "type": "boolean", "description": "Only shops with parking" },
                    "card": { "type": "boolean", "description": "Only shops accepting card payment" },
                    "pet": { "type": "boolean", "description": "Only shops allowing pets" },
                    "child": { "type": "boolean", "description": "Only shops welcoming children" },
                    "count": {
                        "type": "number",
                        "description": "Number of results to return (1-100, default 10)",
                        "default": 10
                    },
                    "start": {
                        "type": "number",
                        "description": "Offset into the result set, for paging",
                        "default": 1
                    }
                }
            }),
        ),
        make_tool(
            "search_by_area",
            "Search for restaurants in a specific region using HotPepper area codes. Large, \
             middle and small area codes narrow the region progressively."
                .to_string(),
            json!({
                "type": "object",
                "properties": {
                    "large_area": {
                        "type": "string",
                        "description": "Large area code (e.g. Z011 = Tokyo)"
                    },
                    "middle_area": {
                        "type": "string",
                        "description": "Middle area code (e.g. Y005 = Shinjuku)"
                    },
                    "small_area": {
                        "type": "string",
                        "description": "Small area code"
                    },
                    "keyword": {
                        "type": "string",
                        "description": "Additional free-text search keyword"
                    },
                    "genre": {
                        "type": "string",
                        "description": "Genre code"
                    },
                    "budget": {
                        "type": "string",
                        "description": "Budget code"
                    },
                    "count": {
                        "type": "number",
                        "description": "Number of results to return (1-100, default 10)",
                        "default": 10
                    }
                }
            }),
        ),
        make_tool(
            "get_genres",
            "List the genre (cuisine category) codes accepted by the search tools' `genre` \
             parameter."
                .to_string(),
            json!({ "type": "object", "properties": {} }),
        ),
        make_tool(
            "get_budgets",
            "List the budget codes accepted by the search tools' `budget` parameter."
                .to_string(),
            json!({ "type": "object", "properties": {} }),
        ),
        make_tool(
            "get_large_areas",
            "List the large area (prefecture-level) codes usable for region-scoped search."
                .to_string(),
            json!({ "type": "object", "properties": {} }),
        ),
        make_tool(
            "get_specials",
            "List the special-feature (occasion) codes accepted by the `special` search \
             parameter: year-end parties, welcome and farewell parties, girls' nights, dates \
             and similar scenes."
                .to_string(),
            json!({ "type": "object", "properties": {} }),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lists_all_operations() {
        let names: Vec<String> = tool_catalog()
            .iter()
            .map(|tool| tool.name.to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "search_restaurants",
                "search_by_area",
                "get_genres",
                "get_budgets",
                "get_large_areas",
                "get_specials",
            ]
        );
    }

    #[test]
    fn test_every_tool_describes_itself() {
        for tool in tool_catalog() {
            let description = tool.description.as_deref().unwrap_or_default();
            assert!(!description.is_empty(), "{} has no description", tool.name);
            assert!(tool.input_schema.contains_key("type"));
        }
    }

    #[test]
    fn test_genre_description_embeds_code_table() {
        let catalog = tool_catalog();
        let search = catalog
            .iter()
            .find(|tool| tool.name == "search_restaurants")
            .expect("search_restaurants should be in the catalog");

        let schema = serde_json::Value::Object((*search.input_schema).clone());
        let genre_description = schema["properties"]["genre"]["description"]
            .as_str()
            .unwrap_or_default();
        assert!(genre_description.contains("G001 (居酒屋)"));
        assert!(genre_description.contains("G017"));

        let count = &schema["properties"]["count"];
        assert_eq!(count["default"], serde_json::json!(10));
    }
}
