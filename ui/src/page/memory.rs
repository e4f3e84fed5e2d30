use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::anyhow;

use super::{PageHost, Surface};

/// Page that only remembers styles. Clones share the same storage.
#[derive(Clone, Default, Debug)]
pub struct MemoryPage {
    styles: Arc<Mutex<HashMap<(Surface, String), String>>>,
}

impl MemoryPage {
    pub fn with_style(self, surface: Surface, property: &str, value: &str) -> anyhow::Result<Self> {
        self.set_style(surface, property, value)?;
        Ok(self)
    }
}

impl PageHost for MemoryPage {
    fn style(&self, surface: Surface, property: &str) -> anyhow::Result<String> {
        let styles = self.styles.lock().map_err(|_| anyhow!("page styles poisoned"))?;
        Ok(styles
            .get(&(surface, property.to_owned()))
            .cloned()
            .unwrap_or_default())
    }

    fn set_style(&self, surface: Surface, property: &str, value: &str) -> anyhow::Result<()> {
        let mut styles = self.styles.lock().map_err(|_| anyhow!("page styles poisoned"))?;
        if value.is_empty() {
            styles.remove(&(surface, property.to_owned()));
        } else {
            styles.insert((surface, property.to_owned()), value.to_owned());
        }
        Ok(())
    }
}
