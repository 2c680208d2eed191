use crate::room::{Room, RoomType};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The hotel's built-in room catalog, in display order.
pub fn sample_rooms() -> Vec<Room> {
    vec![
        Room {
            id: "1".to_string(),
            name: "Deluxe Mountain View".to_string(),
            room_type: RoomType::Deluxe,
            price: 299,
            capacity: 2,
            size: 400,
            beds: "1 King Bed".to_string(),
            amenities: strings(&["Free WiFi", "Mountain View", "Air conditioning", "Flat-screen TV", "Mini bar", "Coffee maker"]),
            images: strings(&[
                "https://images.pexels.com/photos/271624/pexels-photo-271624.jpeg",
                "https://images.pexels.com/photos/1457842/pexels-photo-1457842.jpeg",
            ]),
            description: "Panoramic views of the surrounding mountains, a king-size bed, elegant furnishings and a bathroom stocked with premium amenities.".to_string(),
            featured: true,
            available: true,
        },
        Room {
            id: "2".to_string(),
            name: "Premium Ocean Suite".to_string(),
            room_type: RoomType::Suite,
            price: 499,
            capacity: 3,
            size: 650,
            beds: "1 King Bed + 1 Sofa Bed".to_string(),
            amenities: strings(&["Free WiFi", "Ocean View", "Air conditioning", "Flat-screen TV", "Mini bar", "Coffee maker", "Balcony", "Sitting area", "Bathrobes"]),
            images: strings(&[
                "https://images.pexels.com/photos/262048/pexels-photo-262048.jpeg",
                "https://images.pexels.com/photos/164595/pexels-photo-164595.jpeg",
            ]),
            description: "A private balcony over the ocean and a separate living area with a sofa bed, suited to couples or small families.".to_string(),
            featured: true,
            available: true,
        },
        Room {
            id: "3".to_string(),
            name: "Standard City Room".to_string(),
            room_type: RoomType::Standard,
            price: 199,
            capacity: 2,
            size: 320,
            beds: "2 Queen Beds".to_string(),
            amenities: strings(&["Free WiFi", "City View", "Air conditioning", "Flat-screen TV", "Coffee maker"]),
            images: strings(&[
                "https://images.pexels.com/photos/164595/pexels-photo-164595.jpeg",
                "https://images.pexels.com/photos/271619/pexels-photo-271619.jpeg",
            ]),
            description: "Comfortable city-facing room with the essentials for business travellers and couples.".to_string(),
            featured: false,
            available: true,
        },
        Room {
            id: "4".to_string(),
            name: "Presidential Penthouse".to_string(),
            room_type: RoomType::Presidential,
            price: 999,
            capacity: 4,
            size: 1200,
            beds: "1 King Bed + 2 Queen Beds".to_string(),
            amenities: strings(&["Free WiFi", "Panoramic View", "Air conditioning", "Multiple Flat-screen TVs", "Full bar", "Kitchen", "Dining area", "Jacuzzi", "Private terrace", "Butler service"]),
            images: strings(&[
                "https://images.pexels.com/photos/261102/pexels-photo-261102.jpeg",
                "https://images.pexels.com/photos/276583/pexels-photo-276583.jpeg",
            ]),
            description: "The entire top floor: living and dining rooms, a full kitchen and a private terrace with a jacuzzi.".to_string(),
            featured: true,
            available: true,
        },
        Room {
            id: "5".to_string(),
            name: "Family Deluxe Room".to_string(),
            room_type: RoomType::Deluxe,
            price: 349,
            capacity: 4,
            size: 550,
            beds: "2 Queen Beds".to_string(),
            amenities: strings(&["Free WiFi", "Garden View", "Air conditioning", "Flat-screen TV", "Mini fridge", "Coffee maker", "Extra space"]),
            images: strings(&[
                "https://images.pexels.com/photos/271619/pexels-photo-271619.jpeg",
                "https://images.pexels.com/photos/279746/pexels-photo-279746.jpeg",
            ]),
            description: "Two queen beds and extra floor space so the whole family can spread out after a day out.".to_string(),
            featured: false,
            available: true,
        },
        Room {
            id: "6".to_string(),
            name: "Executive Business Suite".to_string(),
            room_type: RoomType::Suite,
            price: 399,
            capacity: 2,
            size: 480,
            beds: "1 King Bed".to_string(),
            amenities: strings(&["Free WiFi", "City View", "Air conditioning", "Flat-screen TV", "Mini bar", "Coffee maker", "Work desk", "Lounge area", "Printer"]),
            images: strings(&[
                "https://images.pexels.com/photos/260931/pexels-photo-260931.jpeg",
                "https://images.pexels.com/photos/276671/pexels-photo-276671.jpeg",
            ]),
            description: "A separate work area with a large desk and ergonomic chair alongside a king bed.".to_string(),
            featured: true,
            available: true,
        },
    ]
}
