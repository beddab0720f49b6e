//! Built-in campus graphs for the Anna University Guindy campus.
//!
//! Two graphs are bundled: a three-node sample matching the map editor's
//! seed data, and the full surveyed campus map with distances in metres.
//! Both are ordinary [`GraphModel`] values; callers needing a different
//! campus supply their own graph document instead.

use crate::model::{Edge, GraphModel, Node};

/// Surveyed campus points: id, display label, latitude, longitude.
const CAMPUS_NODES: &[(&str, &str, f64, f64)] = &[
    ("A", "Main Gate", 13.0167, 80.2355),
    ("B", "Main Gate Right Road", 13.0164, 80.2348),
    ("C", "Main Gate Left Road", 13.0164, 80.2362),
    ("D", "Anna Statue", 13.0150, 80.2355),
    ("E", "Anna Statue Right Road", 13.0149, 80.2352),
    ("F", "Anna Statue Left Road", 13.0149, 80.2358),
    ("G", "Red Building", 13.0144, 80.2356),
    ("H", "Red Building Right Road", 13.0144, 80.2351),
    ("I", "Red Building Left Road", 13.0144, 80.2361),
    ("J", "CEG Square", 13.0137, 80.2347),
    ("K", "Globe Statue", 13.0136, 80.2345),
    ("L", "RCC", 13.0130, 80.2340),
    ("M", "Library", 13.0126, 80.2336),
    ("N", "Vivek Audi", 13.0130, 80.2352),
    ("O", "Maths Dept", 13.0122, 80.2357),
    ("P", "Swimming Pool", 13.0115, 80.2362),
    ("Q", "Hostel Road", 13.0124, 80.2346),
    ("R", "Science and Humanities", 13.0115, 80.2341),
    ("S", "CSE Dept", 13.0112, 80.2338),
    ("T", "IT Dept", 13.0108, 80.2336),
    ("U", "Knowledge Park", 13.0106, 80.2334),
    ("V", "ECE Dept", 13.0112, 80.2345),
    ("W", "NCC", 13.0109, 80.2348),
    ("X", "Manufacturing Dept", 13.0112, 80.2359),
    ("Y", "Printing Dept", 13.0103, 80.2339),
    ("Z", "Coffee Hut", 13.0104, 80.2344),
    ("AA", "EEE Dept", 13.0114, 80.2363),
    ("AB", "Civil Road", 13.0152, 80.2367),
    ("AC", "Civil Dept", 13.0149, 80.2372),
    ("AD", "Industrial Dept", 13.0157, 80.2365),
    ("AE", "Mech Dept", 13.0138, 80.2374),
    ("AF", "Mech Road", 13.0141, 80.2370),
    ("AG", "Tag Audi", 13.0138, 80.2367),
    ("AH", "Structural Eng Dept", 13.0145, 80.2369),
    ("AI", "Transportation Eng/Soil Mechanics", 13.0148, 80.2367),
    ("AJ", "High Voltage Lab", 13.0149, 80.2364),
    ("AK", "Ocean Management", 13.0135, 80.2378),
    ("AL", "Mining Dept", 13.0126, 80.2372),
    ("AM", "Power System Engineering", 13.0114, 80.2355),
];

/// Surveyed path segments: endpoints and distance in metres.
const CAMPUS_EDGES: &[(&str, &str, f64)] = &[
    ("A", "C", 100.0),
    ("A", "B", 130.0),
    ("B", "J", 280.0),
    ("C", "AD", 150.0),
    ("AD", "AB", 63.0),
    ("AB", "AC", 80.0),
    ("AB", "AJ", 56.0),
    ("I", "AJ", 80.0),
    ("I", "G", 25.0),
    ("G", "H", 25.0),
    ("A", "D", 200.0),
    ("D", "F", 20.0),
    ("F", "I", 70.0),
    ("D", "E", 20.0),
    ("E", "H", 70.0),
    ("H", "J", 75.0),
    ("J", "K", 16.0),
    ("K", "L", 88.0),
    ("L", "M", 58.0),
    ("K", "N", 80.0),
    ("N", "O", 110.0),
    ("O", "P", 92.0),
    ("P", "AA", 18.0),
    ("AA", "AJ", 73.0),
    ("N", "Q", 83.0),
    ("Q", "R", 110.0),
    ("R", "S", 38.0),
    ("S", "T", 50.0),
    ("T", "Y", 70.0),
    ("T", "U", 30.0),
    ("R", "V", 48.0),
    ("V", "W", 43.0),
    ("W", "Z", 92.0),
    ("Z", "Y", 18.0),
    ("W", "X", 47.0),
    ("P", "X", 40.0),
    ("AJ", "AI", 46.0),
    ("AH", "AK", 150.0),
    ("AI", "AH", 37.0),
    ("AH", "AF", 70.0),
    ("AF", "AE", 54.0),
    ("AF", "AG", 45.0),
    ("AK", "AL", 82.0),
    ("AL", "AM", 100.0),
    ("AM", "Z", 38.0),
];

/// The full surveyed campus map.
pub fn campus_graph() -> GraphModel {
    let nodes = CAMPUS_NODES
        .iter()
        .map(|&(id, label, lat, lng)| Node {
            id: id.to_string(),
            label: label.to_string(),
            lat,
            lng,
        })
        .collect();
    let edges = CAMPUS_EDGES
        .iter()
        .map(|&(source, target, distance)| Edge {
            source: source.to_string(),
            target: target.to_string(),
            distance,
        })
        .collect();
    GraphModel::new(nodes, edges)
}

/// The three-node sample around the main building, as seeded by the map
/// editor.
pub fn sample_graph() -> GraphModel {
    let nodes = vec![
        Node {
            id: "A".to_string(),
            label: "Main Building Entrance".to_string(),
            lat: 13.0065,
            lng: 80.2405,
        },
        Node {
            id: "B".to_string(),
            label: "Tagore Auditorium Entrance".to_string(),
            lat: 13.0087,
            lng: 80.2391,
        },
        Node {
            id: "C".to_string(),
            label: "Road Junction 1".to_string(),
            lat: 13.0075,
            lng: 80.2398,
        },
    ];
    let edges = vec![
        Edge {
            source: "A".to_string(),
            target: "C".to_string(),
            distance: 50.0,
        },
        Edge {
            source: "C".to_string(),
            target: "B".to_string(),
            distance: 60.0,
        },
    ];
    GraphModel::new(nodes, edges)
}
