//! The fixed street-name catalog.
//!
//! Atlanta-metro street names grouped by category; selection in
//! [`namer`](crate::namer) ignores the grouping and indexes the flat list.
//! The catalog is static and immutable, so it is safely shared across
//! concurrent route generations.
//!
//! Repeated entries ("Roswell Road" appears in two counties) are kept:
//! catalog order and length feed the hash-modulo selection, and changing
//! either would silently rename waypoints in regenerated fixtures.

/// Label for the first waypoint of every route.
pub const ORIGIN_STREET: &str = "Residential Driveway";

/// Label for the last waypoint of every route.
pub const DESTINATION_STREET: &str = "Destination Parking";

/// The full catalog, indexed by `stable_index` of the waypoint key.
pub static STREETS: &[&str] = &[
    // Interstates
    "I-75 North",
    "I-75 South",
    "I-85 North",
    "I-85 South",
    "I-20 East",
    "I-20 West",
    "I-285 (Perimeter)",
    "I-575 North",
    "I-675 South",
    "I-985 North",
    "GA-400 North",
    "GA-400 South",
    // State highways
    "Highway 9 (Roswell Road)",
    "Highway 92",
    "Highway 141 (Peachtree Rd)",
    "Highway 120",
    "Highway 124",
    "Highway 316",
    "Highway 78",
    "Highway 138",
    "Highway 5",
    "Highway 42",
    "Highway 85",
    // Northern suburban arterials (Cumming, Duluth, Alpharetta)
    "Cumming City Beach Road",
    "Lanier Islands Parkway",
    "Browns Bridge Road",
    "Peachtree Parkway",
    "Windward Parkway",
    "Old Milton Parkway",
    "Duluth Highway",
    "Pleasant Hill Road",
    "Sugarloaf Parkway",
    "Satellite Boulevard",
    "Steve Reynolds Boulevard",
    "Abbotts Bridge Road",
    "McGinnis Ferry Road",
    "Old Peachtree Road",
    "Spalding Drive",
    // Gwinnett County
    "Buford Highway",
    "Lawrenceville Highway",
    "Jimmy Carter Boulevard",
    "Indian Trail Road",
    "Lilburn Stone Mountain Road",
    "Scenic Highway",
    "Club Drive",
    "Beaver Ruin Road",
    "Rockbridge Road",
    "Stone Mountain Highway",
    // Cobb County
    "Cobb Parkway",
    "Marietta Highway",
    "Powder Springs Road",
    "Dallas Highway",
    "Austell Road",
    "Veterans Memorial Highway",
    "Canton Road",
    "Roswell Road",
    "Johnson Ferry Road",
    "Lower Roswell Road",
    // Forsyth County
    "Bethelview Road",
    "Castleberry Road",
    "Keith Bridge Road",
    "Post Road",
    "Dahlonega Highway",
    "McFarland Parkway",
    "Pilgrim Mill Road",
    "Union Hill Road",
    "Spot Road",
    "Samples Road",
    "Drew Campground Road",
    // DeKalb County
    "Memorial Drive",
    "Ponce de Leon Avenue",
    "North Decatur Road",
    "Scott Boulevard",
    "Clairmont Road",
    "LaVista Road",
    "Briarcliff Road",
    "Chamblee Tucker Road",
    "Northlake Parkway",
    "Henderson Mill Road",
    // Fulton County suburbs
    "Roswell Road",
    "Holcomb Bridge Road",
    "Mansell Road",
    "Kimball Bridge Road",
    "Old Alabama Road",
    "Jones Bridge Road",
    "Webb Bridge Road",
    "Haynes Bridge Road",
    "Crossville Road",
    "Union Hill Road",
    // Peachtree corridor
    "Peachtree Street NE",
    "Peachtree Street NW",
    "Peachtree Road",
    "Peachtree Industrial Blvd",
    "Peachtree Dunwoody Road",
    "West Peachtree Street",
    // North-south city arterials
    "Piedmont Avenue",
    "Spring Street",
    "Northside Drive",
    "Monroe Drive",
    "North Highland Avenue",
    "Moreland Avenue",
    "Boulevard",
    "Candler Road",
    "Stone Mountain Freeway",
    "Memorial Drive",
    "Glenwood Avenue",
    // East-west city routes
    "North Avenue",
    "Ponce de Leon Avenue",
    "Virginia Avenue",
    "Freedom Parkway",
    "Ralph McGill Boulevard",
    "Auburn Avenue",
    "Edgewood Avenue",
    "DeKalb Avenue",
    "Decatur Street",
    "Marietta Street",
    "Northside Parkway",
    "Collier Road",
    // Numbered streets
    "10th Street",
    "11th Street",
    "12th Street",
    "13th Street",
    "14th Street",
    "15th Street",
    "16th Street",
    "17th Street",
    "18th Street",
    "19th Street",
    "5th Street",
    "6th Street",
    "7th Street",
    "8th Street",
    "9th Street",
    // Midtown and Buckhead
    "Juniper Street",
    "Cypress Street",
    "Myrtle Street",
    "Pine Street",
    "Charles Allen Drive",
    "Argonne Avenue",
    "Piedmont Circle",
    "Ansley Mall",
    "Monroe Circle",
    "Penn Avenue",
    "Glen Iris Drive",
    "Greenwood Avenue",
    "West Paces Ferry Road",
    "Howell Mill Road",
    "Collier Road",
    "Peachtree Battle Avenue",
    "Habersham Road",
    "Pharr Road",
    "Lenox Road",
    "Piedmont Road",
    // Shopping and business districts
    "Town Center Boulevard",
    "Northpoint Parkway",
    "Mall of Georgia Boulevard",
    "Sugarloaf Mills Circle",
    "Perimeter Center East",
    "Perimeter Center West",
    "Cumberland Parkway",
    "Circle 75 Parkway",
    "Windy Hill Road",
    // Lake Lanier area
    "Lake Lanier Islands Parkway",
    "Friendship Road",
    "Lakeshore Drive",
    "Aqualand Drive",
    "Holiday Road",
    "Sawnee Avenue",
    "Atlanta Highway",
    // Residential suburbs
    "Oakdale Road",
    "Briarcliff Road",
    "LaVista Road",
    "Clairmont Road",
    "Lindbergh Drive",
    "Cheshire Bridge Road",
    "Scott Boulevard",
    "Druid Hills Road",
    "Emory Road",
    "Clifton Road",
    "North Druid Hills Road",
    // Suburban local streets
    "Beverly Road",
    "Rock Springs Road",
    "Powers Ferry Road",
    "Riverside Drive",
    "Arden Road",
    "Broadland Road",
    "Westminster Drive",
    "West Wesley Road",
    "Tuxedo Road",
    "Valley Road",
    "Johnson Ferry Road",
    "Spalding Drive",
];
