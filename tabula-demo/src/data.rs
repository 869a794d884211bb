//! Sample data: the vehicle price list and the fruit catalogue.

use tabula::prelude::*;

#[derive(Debug, Clone)]
pub struct Vehicle {
    pub name: &'static str,
    pub price: i64,
    pub on_road: i64,
    pub road_legal: bool,
    pub icon: &'static str,
    pub score: Option<i64>,
}

pub fn vehicles() -> Vec<Vehicle> {
    let vehicle = |name, price, road_legal, icon, score| Vehicle {
        name,
        price,
        on_road: 11000,
        road_legal,
        icon,
        score,
    };
    vec![
        vehicle("Bicycle", 10000, true, "🚲", Some(5)),
        vehicle("Bike", 200000, true, "🏍", Some(3)),
        vehicle("Car", 2000000, true, "🚗", Some(1)),
        vehicle("Bus", 40000000, true, "🚌", Some(4)),
        vehicle("Ship", 90000000, false, "🚢", Some(4)),
        vehicle("Helicoptor", 100000000, false, "🚁", None),
    ]
}

pub fn vehicle_columns() -> Vec<Column<Vehicle>> {
    vec![
        Column::new("Vehicle", |v: &Vehicle| Ok(v.name.into())).sort_by_display(),
        Column::new("Price", |v: &Vehicle| Ok(v.price.into()))
            .sort_by_display()
            .align(Alignment::Right),
        // Displays price plus 10% tax but sorts by the on-road figure
        Column::new("OnRoad", |v: &Vehicle| Ok((v.price as f64 * 1.1).into()))
            .sortable(|v: &Vehicle| {
                if v.road_legal {
                    Ok(v.on_road.into())
                } else {
                    Err(ExtractError::invalid(format!("{} is not road legal", v.name)))
                }
            })
            .align(Alignment::Right),
        Column::new("Score", |v: &Vehicle| {
            v.score
                .map(Value::from)
                .ok_or_else(|| ExtractError::missing("score"))
        })
        .align(Alignment::Center),
        Column::new("Image", |v: &Vehicle| Ok(v.icon.into())),
    ]
}

pub const FRUITS: &[&str] = &[
    "Ackee",
    "Dragonfruit",
    "indian fig",
    "Pear",
    "Pineapple",
    "Apple",
    "Durian",
    "Ice apple",
    "Muskmelon",
    "Grapes",
    "Apricot",
    "Fig",
    "Guava",
    "Naranjilla",
    "Chestnuts",
    "Atemoya",
    "Egg fruit",
    "Jackfruit",
    "Mangosteen",
    "Rosehip",
    "Avocados",
    "Jujube",
    "Nectarine",
    "Peanut",
    "Banana",
    "Jenipapo",
    "Passion fruit",
    "Watermelon",
    "Blueberry",
    "Persimmon",
    "Mango",
    "Tangerine",
    "Melon",
    "Cantaloupe",
    "Hazelnut",
    "Strawberries",
    "Oranges",
    "Chempedak",
    "Horned melon",
    "Mulberry",
    "Rambutan",
    "Cherimoya",
    "Papaya",
    "Raspberries",
    "Cherry",
    "Honeydew melon",
    "Longan",
    "Peach",
    "Coconut",
    "Kiwi",
    "Lychee",
    "Star Apple",
    "Kabosu",
    "Dates",
    "Kiwano",
    "Lime",
    "Pomegranate",
    "Soursop",
];
