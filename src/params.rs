//Sampling box for synthesized feature coordinates. Draws are taken from
//the half-open interval [COORD_LOW, COORD_HIGH).
pub const COORD_LOW : f32 = -10.0f32;
pub const COORD_HIGH : f32 = 10.0f32;

//Label values as they appear in the last column of a dataset row
pub const POSITIVE_LABEL : f32 = 1.0f32;
pub const NEGATIVE_LABEL : f32 = -1.0f32;

//Plotting constants
pub const PLOT_TITLE : &str = "Linear separable data set";
//Half-width of the x-range the decision boundary line is drawn across
pub const BOUNDARY_LINE_EXTENT : f32 = 12.0f32;
//Length of the projection of the weight arrow onto the x-axis
pub const ARROW_LENGTH : f32 = 10.0f32;
pub const PLOT_EXTENT : f32 = 12.0f32;
pub const PLOT_SIZE : (u32, u32) = (640, 480);
pub const MARKER_SIZE : i32 = 4;

pub const DEFAULT_TEST_THRESH : f32 = 0.001f32;
