use std::{collections::HashMap, path::Path};

use anyhow::{anyhow, Context, Result};
use hocon::{Hocon, HoconLoader};
use log::debug;

/// Loads values from a HOCON config file. Environment variables take
/// precedence over file values, and values inside the named scope take
/// precedence over top level values.
#[derive(Debug)]
pub struct ConfigLoader {
    hocon: Hocon,
    env: HashMap<String, String>,
    scope: String,
}

impl ConfigLoader {
    pub fn new(path: impl AsRef<Path>, scope: String) -> Result<Self> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(anyhow!("The config file {:?} was not found", path));
        }

        let env = std::env::vars().collect::<HashMap<_, _>>();

        let hocon = HoconLoader::new()
            .load_file(path)
            .with_context(|| format!("Failed to load config file at: {:?}", path))?
            .hocon()?;

        Ok(Self { hocon, env, scope })
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.env.get(name) {
            debug!("config value {} taken from the environment", name);
            return Some(Value::String(value.clone()));
        }

        let scope = &self.hocon[self.scope.as_str()];
        if matches!(scope, Hocon::Hash(_)) {
            if let Some(value) = Self::map_hocon(scope, name) {
                return Some(value);
            }
        }

        Self::map_hocon(&self.hocon, name)
    }

    pub fn load<T: Config>(&self) -> Result<T> {
        let res = T::load(self)?;
        Ok(res)
    }

    fn map_hocon(hocon: &Hocon, name: &str) -> Option<Value> {
        match &hocon[name] {
            Hocon::Real(val) => Some(Value::Float(*val as f32)),
            Hocon::Integer(val) => Some(Value::Integer(*val)),
            Hocon::String(val) => Some(Value::String(val.clone())),
            Hocon::Boolean(val) => Some(Value::Boolean(*val)),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f32),
    Boolean(bool),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(val) => Some(*val),
            Value::String(val) => val.parse::<bool>().ok(),
            _ => None,
        }
    }

    pub fn as_usize(&self) -> Option<usize> {
        match self {
            Value::Integer(val) => usize::try_from(*val).ok(),
            Value::String(val) => val.parse::<usize>().ok(),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Integer(val) => i32::try_from(*val).ok(),
            Value::String(val) => val.parse::<i32>().ok(),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Value::Float(val) => Some(*val),
            Value::Integer(val) => Some(*val as f32),
            Value::String(val) => val.parse::<f32>().ok(),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<String> {
        match self {
            Value::String(val) => Some(val.clone()),
            Value::Boolean(val) => Some(val.to_string()),
            Value::Float(val) => Some(val.to_string()),
            Value::Integer(val) => Some(val.to_string()),
        }
    }
}

pub trait Config {
    fn load(config: &ConfigLoader) -> Result<Self>
    where
        Self: Sized;
}
