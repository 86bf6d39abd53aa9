//! Grocery list aggregation.
//!
//! Ingredients from every planned meal are merged into one line per
//! (lower-cased name, unit) pair. Amounts are summed as-is: no unit
//! conversion and no rounding. The first unit seen for a name keeps the
//! plain name; any other unit of the same name is labelled `"name (unit)"`.
//! Lines come out in the order their bucket was first created.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use sufra_shared::recipe::Ingredient;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct GroceryItem {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

/// Merges the ingredient lists of the planned recipes, in plan order.
pub fn aggregate<'a, I>(recipes: I) -> Vec<GroceryItem>
where
    I: IntoIterator<Item = &'a [Ingredient]>,
{
    let mut items: Vec<GroceryItem> = vec![];
    let mut buckets: HashMap<(String, String), usize> = HashMap::new();
    let mut first_unit: HashMap<String, String> = HashMap::new();

    for ingredient in recipes.into_iter().flatten() {
        let key = ingredient.name.to_lowercase();
        let bucket = (key, ingredient.unit.to_owned());

        if let Some(&pos) = buckets.get(&bucket) {
            items[pos].amount += ingredient.amount;
            continue;
        }

        let (key, unit) = bucket;
        let display = match first_unit.get(&key) {
            Some(_) => format!("{key} ({unit})"),
            None => {
                first_unit.insert(key.to_owned(), unit.to_owned());
                key.to_owned()
            }
        };

        buckets.insert((key, unit.to_owned()), items.len());
        items.push(GroceryItem {
            name: capitalize(&display),
            amount: ingredient.amount,
            unit,
        });
    }

    items
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Groups items under the first character of their name. Groups are sorted,
/// items keep their order inside a group.
pub fn group_by_initial(items: &[GroceryItem]) -> BTreeMap<String, Vec<GroceryItem>> {
    let mut groups: BTreeMap<String, Vec<GroceryItem>> = BTreeMap::new();

    for item in items {
        let initial = item.name.chars().next().map(String::from).unwrap_or_default();
        groups.entry(initial).or_default().push(item.clone());
    }

    groups
}

/// One `"Name: amount unit"` line per item.
pub fn to_plain_text(items: &[GroceryItem]) -> String {
    items
        .iter()
        .map(|item| {
            if item.unit.is_empty() {
                format!("{}: {}", item.name, item.amount)
            } else {
                format!("{}: {} {}", item.name, item.amount, item.unit)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ing(name: &str, amount: f64, unit: &str) -> Ingredient {
        Ingredient::new(name, amount, unit)
    }

    fn item(name: &str, amount: f64, unit: &str) -> GroceryItem {
        GroceryItem {
            name: name.to_owned(),
            amount,
            unit: unit.to_owned(),
        }
    }

    #[test]
    fn test_aggregate_merges_across_recipes() {
        let a = vec![ing("Flour", 2.0, "cups")];
        let b = vec![ing("flour", 1.0, "cups"), ing("Sugar", 100.0, "g")];

        let result = aggregate([a.as_slice(), b.as_slice()]);

        assert_eq!(
            result,
            vec![item("Flour", 3.0, "cups"), item("Sugar", 100.0, "g")]
        );
    }

    #[test]
    fn test_aggregate_keeps_units_apart() {
        let a = vec![ing("flour", 2.0, "cups")];
        let b = vec![ing("flour", 200.0, "grams")];

        let result = aggregate([a.as_slice(), b.as_slice()]);

        assert_eq!(
            result,
            vec![
                item("Flour", 2.0, "cups"),
                item("Flour (grams)", 200.0, "grams")
            ]
        );
    }

    #[test]
    fn test_aggregate_three_units_stay_separate() {
        let a = vec![
            ing("milk", 1.0, "cup"),
            ing("milk", 250.0, "ml"),
            ing("Milk", 1.0, "l"),
            ing("milk", 50.0, "ml"),
            ing("MILK", 1.0, "cup"),
        ];

        let result = aggregate([a.as_slice()]);

        assert_eq!(
            result,
            vec![
                item("Milk", 2.0, "cup"),
                item("Milk (ml)", 300.0, "ml"),
                item("Milk (l)", 1.0, "l"),
            ]
        );
    }

    #[test]
    fn test_aggregate_empty_inputs() {
        assert!(aggregate(std::iter::empty::<&[Ingredient]>()).is_empty());

        let empty: Vec<Ingredient> = vec![];
        assert!(aggregate([empty.as_slice(), empty.as_slice()]).is_empty());
    }

    #[test]
    fn test_aggregate_capitalizes_first_char_only() {
        let a = vec![ing("tomato", 2.0, ""), ing("olive OIL", 1.0, "tbsp")];

        let result = aggregate([a.as_slice()]);

        assert_eq!(result[0].name, "Tomato");
        assert_eq!(result[1].name, "Olive oil");
    }

    #[test]
    fn test_aggregate_does_not_round() {
        let a = vec![ing("salt", 0.1, "tsp"), ing("salt", 0.2, "tsp")];

        let result = aggregate([a.as_slice()]);

        assert_eq!(result[0].amount, 0.1 + 0.2);
    }

    #[test]
    fn test_aggregate_bucket_multiset_is_order_independent() {
        let a = vec![ing("egg", 2.0, ""), ing("rice", 1.0, "cup")];
        let b = vec![ing("Rice", 2.0, "cup"), ing("egg", 1.0, "")];

        let mut forward = aggregate([a.as_slice(), b.as_slice()]);
        let mut backward = aggregate([b.as_slice(), a.as_slice()]);
        forward.sort_by(|x, y| x.name.cmp(&y.name));
        backward.sort_by(|x, y| x.name.cmp(&y.name));

        assert_eq!(forward, backward);
        assert_eq!(forward, vec![item("Egg", 3.0, ""), item("Rice", 3.0, "cup")]);
    }

    #[test]
    fn test_group_by_initial() {
        let items = vec![
            item("Sugar", 100.0, "g"),
            item("Flour", 3.0, "cups"),
            item("Salt", 1.0, "tsp"),
        ];

        let groups = group_by_initial(&items);

        assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["F", "S"]);
        assert_eq!(
            groups["S"],
            vec![item("Sugar", 100.0, "g"), item("Salt", 1.0, "tsp")]
        );
    }

    #[test]
    fn test_to_plain_text() {
        let items = vec![
            item("Flour", 3.0, "cups"),
            item("Tomato", 2.0, ""),
            item("Salt", 0.5, "tsp"),
        ];

        assert_eq!(
            to_plain_text(&items),
            "Flour: 3 cups\nTomato: 2\nSalt: 0.5 tsp"
        );
        assert_eq!(to_plain_text(&[]), "");
    }
}
