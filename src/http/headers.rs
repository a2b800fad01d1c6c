//! # Mapa de Headers
//! src/http/headers.rs
//!
//! Política explícita para requests y responses:
//!
//! - Los nombres se comparan exactamente (sensible a mayúsculas), sin
//!   normalización: `User-Agent` y `user-agent` son headers distintos.
//! - Un nombre repetido sobrescribe el valor anterior (gana el último) y
//!   conserva la posición de la primera inserción.
//! - La iteración sigue el orden de inserción, así que el encoding de una
//!   respuesta es determinista.
//! - Los nombres son texto; los valores se guardan como bytes crudos, tal
//!   como llegaron del wire. [`Headers::get`] es la vista textual y solo
//!   existe si el valor es UTF-8 válido; [`Headers::get_bytes`] es la cruda.

/// Headers HTTP como lista ordenada de pares `(nombre, valor)` únicos
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, Vec<u8>)>,
}

impl Headers {
    /// Crea un mapa vacío
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserta o sobrescribe un header
    ///
    /// # Ejemplo
    /// ```
    /// use minihttp::http::Headers;
    ///
    /// let mut headers = Headers::new();
    /// headers.insert("A", "1");
    /// headers.insert("A", "2");
    ///
    /// assert_eq!(headers.get("A"), Some("2"));
    /// assert_eq!(headers.len(), 1);
    /// ```
    pub fn insert(&mut self, name: &str, value: impl AsRef<[u8]>) {
        let value = value.as_ref().to_vec();
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    /// Valor de un header como texto (comparación exacta del nombre)
    ///
    /// `None` si el header no existe o si su valor no es UTF-8 válido.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_bytes(name)
            .and_then(|value| std::str::from_utf8(value).ok())
    }

    /// Valor crudo de un header
    pub fn get_bytes(&self, name: &str) -> Option<&[u8]> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_slice())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get_bytes(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Itera en orden de inserción
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_slice()))
    }
}
