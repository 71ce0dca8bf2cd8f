use crate::GridConfigObject;
use hexview::{anyhow, validator::Validate, GridConfig};
use serde::{Deserialize, Serialize};
use std::{marker::PhantomData, ops::Deref};
use wasm_bindgen::{prelude::*, JsCast};

/// An extension trait for `Result` to allow us to add custom methods
pub trait ResultExt<T, E> {
    /// Helper to convert any result to a result with a JS error value.
    fn into_js(self) -> Result<T, JsValue>;
}

impl<T> ResultExt<T, anyhow::Error> for Result<T, anyhow::Error> {
    fn into_js(self) -> Result<T, JsValue> {
        // Debug formatting includes the whole context chain
        self.map_err(|error| format!("{:?}", error).into())
    }
}

/// Serialize any value into a plain JS object
pub fn to_js<T: Serialize, J: JsCast>(value: &T) -> Result<J, JsValue> {
    JsValue::from_serde(value)
        .map(|value| value.unchecked_into())
        .map_err(|err| format!("Error serializing value: {:?}", err).into())
}

/// A little container for consolidating functionality related to mapping
/// config objects between JS values and Rust values.
pub struct ConfigHelper<T, J>
where
    T: Default + Serialize + for<'a> Deserialize<'a> + Validate,
    J: Deref<Target = JsValue> + JsCast,
{
    phantom_t: PhantomData<T>,
    phantom_j: PhantomData<J>,
}

impl<T, J> ConfigHelper<T, J>
where
    T: Default + Serialize + for<'a> Deserialize<'a> + Validate,
    J: Deref<Target = JsValue> + JsCast,
{
    pub fn new() -> Self {
        Self {
            phantom_t: PhantomData,
            phantom_j: PhantomData,
        }
    }

    /// Get the default config as a JS object.
    pub fn default(&self) -> Result<J, JsValue> {
        to_js(&T::default())
    }

    /// Deserialize a JS object into a config. The input should be an
    /// **object**, not a JSON string. Any missing fields are populated with
    /// defaults. Will return an error if deserialization fails in any way.
    pub fn deserialize(&self, input: &J) -> Result<T, JsValue> {
        JsValue::into_serde(input).map_err(|err| {
            format!("Error deserializing value: {:?}", err).into()
        })
    }

    /// Verify that the given JS object is a valid config. Return the
    /// validated config, with all defaults populated, if it's valid. Return
    /// an error if it isn't.
    pub fn validate(&self, input: &J) -> Result<J, JsValue> {
        // Deserialize the config then validate it manually
        let config = self.deserialize(input)?;
        config.validate().map_err::<JsValue, _>(|err| {
            format!("Invalid value: {:?}", err).into()
        })?;
        // Re-serialize it back into a JS object
        to_js(&config)
    }
}

pub type GridConfigHelper = ConfigHelper<GridConfig, GridConfigObject>;
