use glam::Vec3;

// Shared tuning constants for the gallery core and its hosts.

// Scene layout
pub const SPHERE_RADIUS: f32 = 2.0; // radius of the settled sphere formation
pub const MEDIA_COUNT: usize = 15; // items in the reference catalog
pub const SCATTER_XY_EXTENT: f32 = 1.5; // scatter half-extent in x/y, in radii
pub const SCATTER_Z_EXTENT: f32 = 0.75; // scatter half-extent in z, in radii (keeps depth shallow)
pub const GRID_ROW_FACTOR: f32 = 0.5; // rows = ceil(sqrt(count * factor))
pub const GRID_MIN_RING_POINTS: usize = 3;

// Camera
pub const HOME_EYE: Vec3 = Vec3::new(0.0, 0.0, 5.0);
pub const CAMERA_FOVY_DEGREES: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
pub const VIEW_UP_FALLBACK: Vec3 = Vec3::Z; // up vector when looking straight along +/-Y
pub const VIEW_UP_PARALLEL_COS: f32 = 0.999;

// Focus transition
pub const TRANSITION_MS: u64 = 800; // wall-clock duration of every camera animation
pub const FOCUS_STAND_OFF: f32 = 1.5; // distance beyond the item along its outward ray
pub const DEFAULT_FOCUS_DIRECTION: Vec3 = Vec3::Z; // used when an item sits on the origin

// Formation progress
pub const FORMATION_FULL_DISTANCE_PX: f32 = 10_000.0; // pointer travel for a full formation
pub const FORMATION_IDLE_GRACE_MS: u64 = 5_000;
pub const FORMATION_DECAY_INTERVAL_MS: u64 = 50;
pub const FORMATION_DECAY_STEP: f32 = 0.01;

// Orbit controls
pub const ORBIT_DAMPING: f32 = 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_MIN_POLAR: f32 = 1e-3; // keep away from the poles so look-at stays defined

// Node visuals
pub const NODE_OPACITY_HOVERED: f32 = 1.0;
pub const NODE_OPACITY_IDLE: f32 = 0.95;
pub const NODE_OPACITY_DIMMED: f32 = 0.3; // non-selected items while transitioning/focused
pub const NODE_HOVER_SCALE: f32 = 1.3;
pub const NODE_SCALE_TAU_SEC: f32 = 0.16; // hover scale smoothing time constant
pub const NODE_BASE_SIZE: f32 = 0.6; // thumbnail edge length in world units

// Picking
pub const PICK_RADIUS: f32 = 0.35; // ray-sphere radius around each thumbnail
pub const CLICK_MAX_DRAG_PX: f32 = 4.0; // pointer travel beyond this is an orbit drag, not a click

// Guides and connections
pub const NEAREST_NEIGHBORS: usize = 4;
pub const GEODESIC_NEIGHBORS: usize = 7;
pub const DELAUNAY_CANDIDATES: usize = 8;
pub const DELAUNAY_NEIGHBORS: usize = 6;
pub const GUIDE_LATITUDES: usize = 5;
pub const GUIDE_LONGITUDES: usize = 8;
pub const GUIDE_SEGMENTS: usize = 64;

// Asset preloading
pub const PREVIEW_WIDTH_MARKER: &str = "w=600";
pub const HIGH_QUALITY_WIDTH_MARKER: &str = "w=1200";
