/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield (pixels)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 10.0; // pixels per frame
    pub const PADDLE_MARGIN: f32 = 10.0; // gap between paddle and its side wall

    // Ball
    pub const BALL_SIZE: f32 = 7.0;
    pub const BALL_VELOCITY_X: f32 = 5.0; // pixels per frame
    pub const BALL_VELOCITY_Y: f32 = 5.0;

    // Score
    pub const WIN_SCORE: u8 = 5; // First to 5 wins

    // Timing
    pub const GAME_OVER_DWELL_MS: u64 = 2000;
    pub const FRAME_MS: u64 = 16; // ~60 Hz
}
