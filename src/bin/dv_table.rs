//! Prints the daily reference value table and the nutrient keys mapped onto it
//! Usage: cargo run --bin dv_table

use edible::nutrition::{DailyValueKey, NUTRIENT_DV_MAPPING};

fn main() {
    println!("Daily Reference Values (2,000 kcal diet, adults and children 4+)");
    for key in DailyValueKey::ALL {
        let sources: Vec<&str> = NUTRIENT_DV_MAPPING
            .iter()
            .filter(|(_, mapping)| mapping.daily_value_key() == Some(key))
            .map(|(nutrient, _)| *nutrient)
            .collect();
        println!(
            "  {:<18} {:>7} {:<3} <- {}",
            key.name(),
            key.amount(),
            key.unit(),
            sources.join(", ")
        );
    }

    println!("\nShown without a daily value:");
    for (nutrient, mapping) in NUTRIENT_DV_MAPPING {
        if mapping.daily_value_key().is_none() {
            println!("  {}", nutrient);
        }
    }
}
