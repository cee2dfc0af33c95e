pub mod ballsim_vis2d;
pub mod headless;
