use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::domain::config::{PhysicsConfig, WorldBounds};
use crate::domain::error::PhysicsError;
use crate::domain::scene::{SceneComponent, SceneObject};
use crate::rigid_body::BodyPosition;

use super::perf_stats::StepStats;
use super::{AddOutcome, PhysicsWorld};

fn to_js_error(err: PhysicsError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn position_to_js(position: &BodyPosition) -> Result<JsValue, JsValue> {
    let obj = Object::new();
    Reflect::set(&obj, &"id".into(), &JsValue::from_str(&position.id))?;
    Reflect::set(&obj, &"x".into(), &JsValue::from_f64(position.x as f64))?;
    Reflect::set(&obj, &"y".into(), &JsValue::from_f64(position.y as f64))?;
    Ok(obj.into())
}

/// Play-mode physics handle for the editor
#[wasm_bindgen]
pub struct PhysicsEngine {
    world: PhysicsWorld,
}

#[wasm_bindgen]
impl PhysicsEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { world: PhysicsWorld::new() }
    }

    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config_json: &str) -> Result<PhysicsEngine, JsValue> {
        let config = PhysicsConfig::from_json(config_json).map_err(to_js_error)?;
        Ok(Self { world: PhysicsWorld::with_config(config) })
    }

    /// Called when entering and leaving play mode
    pub fn reset(&mut self) {
        self.world.reset();
    }

    /// Register a scene object. `components_json` defaults to the object's own
    /// `components`. Returns false when the object has no physics components.
    #[wasm_bindgen(js_name = addBody)]
    pub fn add_body(&mut self, object_json: &str, components_json: Option<String>) -> Result<bool, JsValue> {
        let object: SceneObject = serde_json::from_str(object_json)
            .map_err(|e| to_js_error(PhysicsError::from(e)))?;
        let outcome = match components_json {
            Some(json) => {
                let components: Vec<SceneComponent> = serde_json::from_str(&json)
                    .map_err(|e| to_js_error(PhysicsError::from(e)))?;
                self.world.add_body(&object, &components)
            }
            None => self.world.add_scene_object(&object),
        }
        .map_err(to_js_error)?;
        Ok(outcome == AddOutcome::Added)
    }

    #[wasm_bindgen(js_name = removeBody)]
    pub fn remove_body(&mut self, id: &str) -> bool {
        self.world.remove_body(id)
    }

    /// Advance one frame; returns `[{ id, x, y }, ...]`
    pub fn step(&mut self) -> Result<Array, JsValue> {
        let positions = self.world.step();
        let out = Array::new_with_length(positions.len() as u32);
        for (i, position) in positions.iter().enumerate() {
            out.set(i as u32, position_to_js(position)?);
        }
        Ok(out)
    }

    /// Same as `step`, serialized as JSON
    #[wasm_bindgen(js_name = stepJson)]
    pub fn step_json(&mut self) -> Result<String, JsValue> {
        let positions = self.world.step();
        serde_json::to_string(&positions).map_err(|e| to_js_error(PhysicsError::from(e)))
    }

    #[wasm_bindgen(getter, js_name = bodyCount)]
    pub fn body_count(&self) -> usize {
        self.world.body_count()
    }

    #[wasm_bindgen(js_name = setGravity)]
    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.world.set_gravity(x, y);
    }

    /// Lower world boundary; bodies are reflected off `x < minX` and `y < minY`
    #[wasm_bindgen(js_name = setBounds)]
    pub fn set_bounds(&mut self, min_x: f32, min_y: f32) {
        self.world.set_bounds(Some(WorldBounds { min_x, min_y }));
    }

    #[wasm_bindgen(js_name = clearBounds)]
    pub fn clear_bounds(&mut self) {
        self.world.set_bounds(None);
    }

    #[wasm_bindgen(js_name = lastStepStats)]
    pub fn last_step_stats(&self) -> StepStats {
        self.world.last_step_stats()
    }
}

impl Default for PhysicsEngine {
    fn default() -> Self {
        Self::new()
    }
}
