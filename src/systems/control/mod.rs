mod orientation;

pub use orientation::OrientationSubsystem;
