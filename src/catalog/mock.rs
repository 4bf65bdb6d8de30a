//! Static facility dataset around central Bangalore.

use crate::models::{Coordinate, Facility, FacilityType, Review, ToiletStyle};

struct Seed {
    id: &'static str,
    name: &'static str,
    kind: FacilityType,
    address: &'static str,
    distance: f64,
    rating: f64,
    cleanliness: f64,
    /// open, free, wheelchair, stroller, diaper, feeding
    flags: [bool; 6],
    location: (f64, f64),
    image: &'static str,
}

impl Seed {
    fn build(self) -> Facility {
        let [is_open, is_free, wheelchair, stroller, diaper, feeding] = self.flags;
        Facility {
            id: self.id.into(),
            name: self.name.into(),
            kind: self.kind,
            address: self.address.into(),
            distance: self.distance,
            rating: self.rating,
            cleanliness_rating: self.cleanliness,
            is_open,
            is_free,
            has_wheelchair_access: wheelchair,
            has_stroller_access: stroller,
            has_diaper_change: diaper,
            has_feeding_area: feeding,
            image_url: format!("https://images.unsplash.com/{}?w=400", self.image),
            location: Coordinate::new(self.location.0, self.location.1),
            toilet_style: None,
            floor: None,
            location_details: None,
            reviews: None,
            is_roadside: None,
            diversion_distance: None,
            open_time: None,
            close_time: None,
        }
    }
}

/// Fresh copy of the built-in facility list.
pub fn mock_facilities() -> Vec<Facility> {
    vec![
        Facility {
            toilet_style: Some(ToiletStyle::IndianAndWestern),
            floor: Some("Level 2".into()),
            location_details: Some("Next to the food court escalators".into()),
            diversion_distance: Some(0.4),
            open_time: Some("10:00 AM".into()),
            close_time: Some("10:00 PM".into()),
            reviews: Some(vec![
                Review::new("r1", "Ananya", 5, "Spotless and well stocked. Attendant on duty.", "2 days ago"),
                Review::new("r2", "Rahul", 4, "Clean, but a short queue on weekends.", "1 week ago"),
            ]),
            ..Seed {
                id: "1",
                name: "Phoenix Marketcity Restrooms",
                kind: FacilityType::Mall,
                address: "Whitefield Main Rd, Mahadevapura, Bengaluru",
                distance: 1.2,
                rating: 4.7,
                cleanliness: 4.8,
                flags: [true, true, true, true, true, true],
                location: (12.9975, 77.6966),
                image: "photo-1567958451986-2de427a4a0be",
            }
            .build()
        },
        Facility {
            toilet_style: Some(ToiletStyle::Western),
            is_roadside: Some(true),
            diversion_distance: Some(0.0),
            open_time: Some("24/7".into()),
            reviews: Some(vec![Review::new(
                "r3",
                "Vikram",
                4,
                "Handy on the highway run, water was available.",
                "3 days ago",
            )]),
            ..Seed {
                id: "2",
                name: "Indian Oil Fuel Station",
                kind: FacilityType::PetrolBunk,
                address: "Old Airport Rd, HAL 2nd Stage, Bengaluru",
                distance: 0.6,
                rating: 3.9,
                cleanliness: 3.5,
                flags: [true, true, false, false, false, false],
                location: (12.9591, 77.6484),
                image: "photo-1545262810-77515befe149",
            }
            .build()
        },
        Facility {
            toilet_style: Some(ToiletStyle::Indian),
            diversion_distance: Some(0.15),
            open_time: Some("06:00 AM".into()),
            close_time: Some("09:00 PM".into()),
            ..Seed {
                id: "3",
                name: "Sulabh Shauchalaya Complex",
                kind: FacilityType::PublicPayAndUse,
                address: "MG Road Metro Station Exit B, Bengaluru",
                distance: 0.3,
                rating: 3.4,
                cleanliness: 3.0,
                flags: [true, false, true, false, false, false],
                location: (12.9756, 77.6066),
                image: "photo-1584622650111-993a426fbf0a",
            }
            .build()
        },
        Facility {
            toilet_style: Some(ToiletStyle::Western),
            diversion_distance: Some(0.25),
            open_time: Some("06:00 AM".into()),
            close_time: Some("06:00 PM".into()),
            location_details: Some("Near the Hudson Circle gate".into()),
            ..Seed {
                id: "4",
                name: "Cubbon Park Public Toilet",
                kind: FacilityType::Park,
                address: "Kasturba Rd, Sampangi Rama Nagar, Bengaluru",
                distance: 0.9,
                rating: 3.8,
                cleanliness: 3.6,
                flags: [false, true, true, true, false, false],
                location: (12.9763, 77.5929),
                image: "photo-1519331379826-f10be5486c6f",
            }
            .build()
        },
        Facility {
            toilet_style: Some(ToiletStyle::Western),
            floor: Some("Lobby".into()),
            open_time: Some("24/7".into()),
            reviews: Some(vec![Review::new(
                "r4",
                "Meera",
                5,
                "Staff let me use the nursing lounge without fuss.",
                "5 days ago",
            )]),
            ..Seed {
                id: "5",
                name: "The Oberoi Lobby Lounge",
                kind: FacilityType::Hotel,
                address: "37-39 MG Road, Yellappa Garden, Bengaluru",
                distance: 1.8,
                rating: 4.9,
                cleanliness: 4.9,
                flags: [true, false, true, true, true, true],
                location: (12.9731, 77.6183),
                image: "photo-1566073771259-6a8506099945",
            }
            .build()
        },
        Facility {
            toilet_style: Some(ToiletStyle::Western),
            diversion_distance: Some(0.5),
            open_time: Some("08:00 AM".into()),
            close_time: Some("11:00 PM".into()),
            ..Seed {
                id: "6",
                name: "Third Wave Coffee",
                kind: FacilityType::CoffeeShop,
                address: "80 Feet Rd, Koramangala 4th Block, Bengaluru",
                distance: 2.4,
                rating: 4.3,
                cleanliness: 4.1,
                flags: [true, false, false, true, true, false],
                location: (12.9352, 77.6245),
                image: "photo-1501339847302-ac426a4a7cbb",
            }
            .build()
        },
        Facility {
            toilet_style: Some(ToiletStyle::IndianAndWestern),
            floor: Some("Arrivals, Gate 4".into()),
            open_time: Some("24/7".into()),
            reviews: Some(vec![
                Review::new("r5", "Sanjay", 5, "Huge, clean, and the baby room has a sink.", "Yesterday"),
                Review::new("r6", "Priya", 4, "Good facilities but far from the food court.", "2 weeks ago"),
            ]),
            ..Seed {
                id: "7",
                name: "Kempegowda Airport Terminal 1",
                kind: FacilityType::Airport,
                address: "KIAL Rd, Devanahalli, Bengaluru",
                distance: 28.5,
                rating: 4.6,
                cleanliness: 4.7,
                flags: [true, true, true, true, true, true],
                location: (13.1986, 77.7066),
                image: "photo-1436491865332-7a61a109cc05",
            }
            .build()
        },
        Facility {
            toilet_style: Some(ToiletStyle::Indian),
            is_roadside: Some(true),
            diversion_distance: Some(0.05),
            open_time: Some("24/7".into()),
            ..Seed {
                id: "8",
                name: "NH44 Highway Plaza",
                kind: FacilityType::HighwayService,
                address: "Bellary Rd, Yelahanka, Bengaluru",
                distance: 14.2,
                rating: 3.6,
                cleanliness: 3.2,
                flags: [true, false, true, false, false, false],
                location: (13.1007, 77.5963),
                image: "photo-1513828583688-c52646db42da",
            }
            .build()
        },
        Facility {
            toilet_style: Some(ToiletStyle::Western),
            floor: Some("Ground".into()),
            diversion_distance: Some(0.3),
            open_time: Some("07:00 AM".into()),
            close_time: Some("10:30 PM".into()),
            ..Seed {
                id: "9",
                name: "Vidyarthi Bhavan",
                kind: FacilityType::Eatery,
                address: "Gandhi Bazaar Main Rd, Basavanagudi, Bengaluru",
                distance: 4.1,
                rating: 4.4,
                cleanliness: 3.7,
                flags: [false, false, false, false, false, false],
                location: (12.9450, 77.5713),
                image: "photo-1555396273-367ea4eb4db5",
            }
            .build()
        },
        Facility {
            toilet_style: Some(ToiletStyle::IndianAndWestern),
            floor: Some("Platform 1".into()),
            diversion_distance: Some(0.6),
            open_time: Some("24/7".into()),
            ..Seed {
                id: "10",
                name: "KSR Bengaluru City Junction",
                kind: FacilityType::TrainStation,
                address: "Gubbi Thotadappa Rd, Majestic, Bengaluru",
                distance: 3.3,
                rating: 3.2,
                cleanliness: 2.8,
                flags: [true, false, true, true, true, false],
                location: (12.9781, 77.5695),
                image: "photo-1474487548417-781cb71495f3",
            }
            .build()
        },
    ]
}
