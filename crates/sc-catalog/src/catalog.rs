use sc_core::Score;

/// Grouping of checklist parameters into the form's two scoring sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Platform,
    Facilities,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Platform => "Platform Areas",
            Category::Facilities => "Facilities & Amenities",
        }
    }
}

/// One entry of the inspection checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
}

const INSPECTION_CATALOG: [Parameter; 22] = [
    // Platform areas
    Parameter {
        id: "platform-cleanliness",
        name: "Platform Cleanliness",
        description: "Overall cleanliness of platform surfaces, absence of litter and debris",
        category: Category::Platform,
    },
    Parameter {
        id: "platform-sweeping",
        name: "Platform Sweeping",
        description: "Evidence of regular sweeping, dust-free surfaces",
        category: Category::Platform,
    },
    Parameter {
        id: "platform-mopping",
        name: "Platform Mopping",
        description: "Wet cleaning status, stain-free surfaces",
        category: Category::Platform,
    },
    Parameter {
        id: "platform-washing",
        name: "Platform Washing",
        description: "Deep cleaning evidence, absence of accumulated dirt",
        category: Category::Platform,
    },
    Parameter {
        id: "circulating-area",
        name: "Circulating Area",
        description: "Passenger circulation areas, concourse cleanliness",
        category: Category::Platform,
    },
    Parameter {
        id: "waiting-hall",
        name: "Waiting Hall",
        description: "Waiting area cleanliness, seating areas condition",
        category: Category::Platform,
    },
    Parameter {
        id: "reservation-counter",
        name: "Reservation Counter Area",
        description: "Ticketing area cleanliness, counter surfaces",
        category: Category::Platform,
    },
    Parameter {
        id: "enquiry-counter",
        name: "Enquiry Counter Area",
        description: "Information desk area, help counter surroundings",
        category: Category::Platform,
    },
    // Facilities and amenities
    Parameter {
        id: "toilets-gents",
        name: "Toilets - Gents",
        description: "Male restroom cleanliness, hygiene standards",
        category: Category::Facilities,
    },
    Parameter {
        id: "toilets-ladies",
        name: "Toilets - Ladies",
        description: "Female restroom cleanliness, hygiene standards",
        category: Category::Facilities,
    },
    Parameter {
        id: "urinals",
        name: "Urinals",
        description: "Urinal cleanliness, odor control, maintenance",
        category: Category::Facilities,
    },
    Parameter {
        id: "wash-basins",
        name: "Wash Basins",
        description: "Hand washing facilities, soap availability, drainage",
        category: Category::Facilities,
    },
    Parameter {
        id: "water-cooler",
        name: "Water Cooler",
        description: "Drinking water facility cleanliness, water quality",
        category: Category::Facilities,
    },
    Parameter {
        id: "water-booths",
        name: "Water Booths/Taps",
        description: "Water dispensing points, tap cleanliness",
        category: Category::Facilities,
    },
    Parameter {
        id: "dustbins",
        name: "Dustbins",
        description: "Waste bins condition, regular emptying, lid functionality",
        category: Category::Facilities,
    },
    Parameter {
        id: "spittoons",
        name: "Spittoons",
        description: "Spitting containers cleanliness, maintenance",
        category: Category::Facilities,
    },
    Parameter {
        id: "drains-platform",
        name: "Drains - Platform",
        description: "Platform drainage system, blockage-free condition",
        category: Category::Facilities,
    },
    Parameter {
        id: "drains-toilet",
        name: "Drains - Toilet",
        description: "Restroom drainage, odor control, proper flow",
        category: Category::Facilities,
    },
    Parameter {
        id: "retiring-rooms",
        name: "Retiring Rooms",
        description: "Guest accommodation cleanliness, bedding, facilities",
        category: Category::Facilities,
    },
    Parameter {
        id: "dormitory",
        name: "Dormitory",
        description: "Shared accommodation areas, common facilities",
        category: Category::Facilities,
    },
    Parameter {
        id: "parking-area",
        name: "Parking Area",
        description: "Vehicle parking cleanliness, litter-free approach",
        category: Category::Facilities,
    },
    Parameter {
        id: "foot-over-bridge",
        name: "Foot Over Bridge",
        description: "Stairways and bridge deck cleanliness, handrail condition",
        category: Category::Facilities,
    },
];

/// The full checklist, in display order.
pub fn parameters() -> &'static [Parameter] {
    &INSPECTION_CATALOG
}

/// Order-preserving view of one section of the checklist.
pub fn by_category(category: Category) -> impl Iterator<Item = &'static Parameter> {
    parameters().iter().filter(move |p| p.category == category)
}

pub fn find(id: &str) -> Option<&'static Parameter> {
    parameters().iter().find(|p| p.id == id)
}

/// Total achievable score across the whole checklist.
pub fn max_possible_score() -> u32 {
    parameters().len() as u32 * u32::from(Score::MAX_VALUE)
}
