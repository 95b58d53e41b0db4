//! Bridge between the simulation and whatever draws it.
//!
//! The simulation knows nothing about meshes or materials. A renderer only
//! has to implement [`SceneGraph`]; [`SceneSync`] keeps one proxy per body
//! and copies positions across after every tick.

use crate::body::BodyId;
use crate::simulation::{SimEvent, Simulation};
use glam::Vec3;
use log::warn;
use std::collections::HashMap;

/// Something that can hold visual sphere proxies.
pub trait SceneGraph {
    /// Handle returned for each proxy.
    type Proxy: Copy;

    /// Create a sphere proxy with the given radius and color.
    fn add_sphere(&mut self, radius: f32, color: Vec3) -> Self::Proxy;

    /// Remove a proxy. Unknown handles are ignored.
    fn remove_sphere(&mut self, proxy: Self::Proxy);

    /// Move a proxy.
    fn set_position(&mut self, proxy: Self::Proxy, position: Vec3);
}

/// Keeps a [`SceneGraph`] in step with a [`Simulation`].
#[derive(Debug)]
pub struct SceneSync<P> {
    proxies: HashMap<BodyId, P>,
}

impl<P: Copy> SceneSync<P> {
    pub fn new() -> Self {
        Self {
            proxies: HashMap::new(),
        }
    }

    /// Number of live proxies.
    pub fn len(&self) -> usize {
        self.proxies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proxies.is_empty()
    }

    pub fn proxy(&self, id: BodyId) -> Option<P> {
        self.proxies.get(&id).copied()
    }

    /// Create proxies for every current body and start event recording.
    pub fn attach<S>(&mut self, sim: &mut Simulation, scene: &mut S)
    where
        S: SceneGraph<Proxy = P>,
    {
        for body in sim.bodies() {
            if self.proxies.contains_key(&body.id()) {
                continue;
            }
            let proxy = scene.add_sphere(body.radius(), body.color());
            scene.set_position(proxy, body.position);
            self.proxies.insert(body.id(), proxy);
        }
        sim.set_record_events(true);
    }

    /// Apply spawn/despawn events, then write every body position.
    pub fn sync<S>(&mut self, sim: &mut Simulation, scene: &mut S)
    where
        S: SceneGraph<Proxy = P>,
    {
        for event in sim.drain_events() {
            match event {
                SimEvent::Spawned { id, radius, color } => {
                    let proxy = scene.add_sphere(radius, color);
                    if let Some(old) = self.proxies.insert(id, proxy) {
                        warn!("Body {} spawned twice, replacing its proxy", id);
                        scene.remove_sphere(old);
                    }
                }
                SimEvent::Despawned { id } => {
                    if let Some(proxy) = self.proxies.remove(&id) {
                        scene.remove_sphere(proxy);
                    }
                }
            }
        }

        for body in sim.bodies() {
            if let Some(&proxy) = self.proxies.get(&body.id()) {
                scene.set_position(proxy, body.position);
            }
        }
    }
}

impl<P: Copy> Default for SceneSync<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// GPU instance record for one sphere.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereInstance {
    /// xyz = center, w = radius.
    pub center_radius: [f32; 4],
    /// rgb = color, a unused.
    pub color: [f32; 4],
}

/// Handle into [`SphereInstances`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SphereHandle(u32);

/// Packed sphere instances ready for upload.
///
/// Removal swaps the last instance into the freed slot so the array stays
/// dense; handles stay valid across removals.
#[derive(Debug, Default)]
pub struct SphereInstances {
    instances: Vec<SphereInstance>,
    slot_of: HashMap<SphereHandle, usize>,
    handle_at: Vec<SphereHandle>,
    next_handle: u32,
}

impl SphereInstances {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[SphereInstance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn get(&self, handle: SphereHandle) -> Option<&SphereInstance> {
        self.slot_of.get(&handle).map(|&slot| &self.instances[slot])
    }
}

impl SceneGraph for SphereInstances {
    type Proxy = SphereHandle;

    fn add_sphere(&mut self, radius: f32, color: Vec3) -> SphereHandle {
        let handle = SphereHandle(self.next_handle);
        self.next_handle = self.next_handle.wrapping_add(1);

        self.slot_of.insert(handle, self.instances.len());
        self.handle_at.push(handle);
        self.instances.push(SphereInstance {
            center_radius: [0.0, 0.0, 0.0, radius],
            color: [color.x, color.y, color.z, 1.0],
        });
        handle
    }

    fn remove_sphere(&mut self, handle: SphereHandle) {
        let Some(slot) = self.slot_of.remove(&handle) else {
            return;
        };
        self.instances.swap_remove(slot);
        self.handle_at.swap_remove(slot);
        if let Some(&moved) = self.handle_at.get(slot) {
            self.slot_of.insert(moved, slot);
        }
    }

    fn set_position(&mut self, handle: SphereHandle, position: Vec3) {
        if let Some(&slot) = self.slot_of.get(&handle) {
            let cr = &mut self.instances[slot].center_radius;
            cr[0] = position.x;
            cr[1] = position.y;
            cr[2] = position.z;
        }
    }
}
