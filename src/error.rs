//! Error types for bounce3d.
//!
//! Body and configuration errors are raised before a simulation ever ticks.
//! GPU and window errors only occur when running the interactive viewer.

use std::fmt;

/// Errors that can occur when constructing a [`Body`](crate::Body).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyError {
    /// Radius must be finite and strictly positive.
    InvalidRadius(f32),
}

impl fmt::Display for BodyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyError::InvalidRadius(r) => {
                write!(f, "Invalid body radius {}: radius must be finite and greater than zero", r)
            }
        }
    }
}

impl std::error::Error for BodyError {}

/// Errors reported by [`SimConfig::validate`](crate::SimConfig::validate).
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Gravity must be a positive acceleration magnitude.
    Gravity(f32),
    /// Time step must be positive.
    TimeStep(f32),
    /// Restitution must lie strictly between 0 and 1.
    Restitution(f32),
    /// Removal threshold of zero would despawn bodies before their first bounce.
    RemovalThreshold,
    /// A spawn setting is out of range.
    Spawn(&'static str),
    /// Invalid body parameters (radius, seed position).
    Body(BodyError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Gravity(g) => write!(f, "Gravity must be positive, got {}", g),
            ConfigError::TimeStep(dt) => write!(f, "Time step must be positive, got {}", dt),
            ConfigError::Restitution(r) => {
                write!(f, "Restitution must be between 0 and 1 (exclusive), got {}", r)
            }
            ConfigError::RemovalThreshold => write!(f, "Removal threshold must be at least 1 bounce"),
            ConfigError::Spawn(msg) => write!(f, "Invalid spawn setting: {}", msg),
            ConfigError::Body(e) => write!(f, "Invalid body setting: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Body(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BodyError> for ConfigError {
    fn from(e: BodyError) -> Self {
        ConfigError::Body(e)
    }
}

/// Errors that can occur during GPU initialization.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter,
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::NoAdapter => write!(f, "No compatible GPU adapter found. Ensure your system has a GPU with WebGPU/Vulkan/Metal/DX12 support."),
            GpuError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
            GpuError::NoAdapter => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// Errors that can occur when running the interactive viewer.
#[derive(Debug)]
pub enum SimulationError {
    /// Failed to create event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create window.
    Window(winit::error::OsError),
    /// GPU initialization failed.
    Gpu(GpuError),
    /// The simulation configuration was rejected.
    Config(ConfigError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            SimulationError::Window(e) => write!(f, "Failed to create window: {}", e),
            SimulationError::Gpu(e) => write!(f, "GPU error: {}", e),
            SimulationError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::EventLoop(e) => Some(e),
            SimulationError::Window(e) => Some(e),
            SimulationError::Gpu(e) => Some(e),
            SimulationError::Config(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for SimulationError {
    fn from(e: winit::error::EventLoopError) -> Self {
        SimulationError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for SimulationError {
    fn from(e: winit::error::OsError) -> Self {
        SimulationError::Window(e)
    }
}

impl From<GpuError> for SimulationError {
    fn from(e: GpuError) -> Self {
        SimulationError::Gpu(e)
    }
}

impl From<ConfigError> for SimulationError {
    fn from(e: ConfigError) -> Self {
        SimulationError::Config(e)
    }
}
