//! The JSON document model
//!
//! A [`JsonDocument`] is one parse/build session: it owns the string arena
//! and the slot pools for values, fields and objects, and hands out `Copy`
//! handles into them. Dropping the document (or calling
//! [`JsonDocument::free_all`]) releases the whole tree at once; no node is
//! ever freed individually while the session lives.
//!
//! Objects keep two views of their fields in lock-step: the insertion-ordered
//! list that drives serialization, and a hash index from key hash to the most
//! recently inserted field with that hash, collision-chained through the
//! field slots. There is no delete; fields are only added or overwritten in
//! place through [`JsonDocument::set_field_value`].

pub mod value;

pub use value::JsonValue;

use crate::errors::{ValueError, ValueResult};
use crate::memory::{str_hash, Arena, RawMap, StrRef};

/// Handle to a value node in a [`JsonDocument`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueId(u32);

/// Handle to a field (key/value pair) in a [`JsonDocument`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId(u32);

/// Handle to an object in a [`JsonDocument`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(u32);

#[derive(Debug)]
struct FieldSlot {
    key: StrRef,
    value: ValueId,
    /// Hash-bucket chain link on key-hash collision; never used for ordering
    next: Option<FieldId>,
}

#[derive(Debug)]
struct ObjectSlot {
    /// Insertion order, significant for serialization
    fields: Vec<FieldId>,
    /// key hash -> most recently inserted field with that hash
    index: RawMap,
    /// Presentation attribute: pretty-print this object's braces and fields
    pretty: bool,
}

/// One parse/build session: the value tree plus the storage backing it
#[derive(Debug, Default)]
pub struct JsonDocument {
    strings: Arena,
    values: Vec<JsonValue>,
    fields: Vec<FieldSlot>,
    objects: Vec<ObjectSlot>,
    root: Option<ObjectId>,
}

impl JsonDocument {
    /// Create an empty session
    pub fn new() -> Self {
        JsonDocument {
            strings: Arena::new(),
            values: Vec::new(),
            fields: Vec::new(),
            objects: Vec::new(),
            root: None,
        }
    }

    // --- value constructors ---

    /// Allocate an integer value
    pub fn value_int(&mut self, val: i32) -> ValueId {
        self.alloc_value(JsonValue::Int(val))
    }

    /// Allocate a float value
    pub fn value_float(&mut self, val: f64) -> ValueId {
        self.alloc_value(JsonValue::Float(val))
    }

    /// Allocate a string value, copying `text` into the session arena
    pub fn value_string(&mut self, text: &str) -> ValueId {
        let text_ref = self.strings.alloc_str(text);
        self.alloc_value(JsonValue::Str(text_ref))
    }

    /// Allocate a boolean value
    pub fn value_bool(&mut self, val: bool) -> ValueId {
        self.alloc_value(JsonValue::Bool(val))
    }

    /// Allocate the null value
    pub fn value_null(&mut self) -> ValueId {
        self.alloc_value(JsonValue::Null)
    }

    /// Allocate an array value, appending each element in order with the
    /// same growable-push operation used post-construction
    pub fn value_array(&mut self, elems: &[ValueId]) -> ValueId {
        let array = self.alloc_value(JsonValue::Array(Vec::new()));
        for &elem in elems {
            self.push_elem(array, elem);
        }
        array
    }

    /// Allocate an object value wrapping `object`, or a fresh empty object
    /// when `None` is given
    pub fn value_object(&mut self, object: Option<ObjectId>) -> ValueId {
        let object = match object {
            Some(object) => object,
            None => self.make_object(&[]),
        };
        self.alloc_value(JsonValue::Object(object))
    }

    fn alloc_value(&mut self, value: JsonValue) -> ValueId {
        let id = ValueId(self.values.len() as u32);
        self.values.push(value);
        id
    }

    // --- fields and objects ---

    /// Allocate a field, copying `key` into the session arena
    pub fn field(&mut self, key: &str, value: ValueId) -> FieldId {
        let key_ref = self.strings.alloc_str(key);
        let id = FieldId(self.fields.len() as u32);
        self.fields.push(FieldSlot {
            key: key_ref,
            value,
            next: None,
        });
        id
    }

    /// Build an object from `fields`, constructing the hash index
    /// incrementally via [`JsonDocument::put_field`]
    pub fn make_object(&mut self, fields: &[FieldId]) -> ObjectId {
        let id = ObjectId(self.objects.len() as u32);
        self.objects.push(ObjectSlot {
            fields: Vec::new(),
            index: RawMap::new(),
            pretty: false,
        });
        for &field in fields {
            self.put_field(id, field);
        }
        id
    }

    /// Append `field` to `object`, updating both views in lock-step.
    ///
    /// A field whose key content equals an already present key does not
    /// replace it: both stay in the ordered list, the new one becomes the
    /// chain head, and [`JsonDocument::get_field`] returns the most recent.
    /// Callers wanting strict replacement pre-check with `get_field` and
    /// assign through [`JsonDocument::set_field_value`].
    pub fn put_field(&mut self, object: ObjectId, field: FieldId) {
        let hash = str_hash(self.strings.get(self.fields[field.0 as usize].key));
        let slot = &mut self.objects[object.0 as usize];
        let head = slot.index.get(hash).map(FieldId);
        self.fields[field.0 as usize].next = head;
        slot.index.put(hash, field.0);
        slot.fields.push(field);
    }

    /// Look up a field by key content: hash, find the chain head, walk the
    /// chain comparing content. A miss is `None`, not an error.
    pub fn get_field(&self, object: ObjectId, key: &str) -> Option<FieldId> {
        let hash = str_hash(key);
        let slot = &self.objects[object.0 as usize];
        let mut cursor = slot.index.get(hash).map(FieldId);
        while let Some(field) = cursor {
            let field_slot = &self.fields[field.0 as usize];
            if self.strings.get(field_slot.key) == key {
                return Some(field);
            }
            cursor = field_slot.next;
        }
        None
    }

    /// The key of a field
    pub fn field_key(&self, field: FieldId) -> &str {
        self.strings.get(self.fields[field.0 as usize].key)
    }

    /// The value of a field
    pub fn field_value(&self, field: FieldId) -> ValueId {
        self.fields[field.0 as usize].value
    }

    /// Overwrite a field's value in place
    pub fn set_field_value(&mut self, field: FieldId, value: ValueId) {
        self.fields[field.0 as usize].value = value;
    }

    /// The fields of an object in insertion order
    pub fn fields(&self, object: ObjectId) -> &[FieldId] {
        &self.objects[object.0 as usize].fields
    }

    /// Number of fields in an object (duplicate keys counted)
    pub fn field_count(&self, object: ObjectId) -> usize {
        self.objects[object.0 as usize].fields.len()
    }

    /// Whether this object pretty-prints
    pub fn pretty(&self, object: ObjectId) -> bool {
        self.objects[object.0 as usize].pretty
    }

    /// Set the per-object pretty-print attribute
    pub fn set_pretty(&mut self, object: ObjectId, pretty: bool) {
        self.objects[object.0 as usize].pretty = pretty;
    }

    /// The root object, if the document has one
    pub fn root(&self) -> Option<ObjectId> {
        self.root
    }

    /// Set the root object
    pub fn set_root(&mut self, object: ObjectId) {
        self.root = Some(object);
    }

    // --- arrays ---

    /// Append `elem` to the array value `array`; amortized O(1)
    pub fn array_push(&mut self, array: ValueId, elem: ValueId) -> ValueResult<()> {
        match &mut self.values[array.0 as usize] {
            JsonValue::Array(elems) => {
                elems.push(elem);
                Ok(())
            }
            other => Err(ValueError::type_mismatch("array", other.type_name())),
        }
    }

    fn push_elem(&mut self, array: ValueId, elem: ValueId) {
        if let JsonValue::Array(elems) = &mut self.values[array.0 as usize] {
            elems.push(elem);
        }
    }

    // --- typed access ---

    /// The value node behind a handle
    pub fn value(&self, value: ValueId) -> &JsonValue {
        &self.values[value.0 as usize]
    }

    /// Extract an integer (strict)
    pub fn as_int(&self, value: ValueId) -> ValueResult<i32> {
        match self.value(value) {
            JsonValue::Int(i) => Ok(*i),
            other => Err(ValueError::type_mismatch("integer", other.type_name())),
        }
    }

    /// Extract a float (strict)
    pub fn as_float(&self, value: ValueId) -> ValueResult<f64> {
        match self.value(value) {
            JsonValue::Float(f) => Ok(*f),
            other => Err(ValueError::type_mismatch("float", other.type_name())),
        }
    }

    /// Extract a string (strict)
    pub fn as_str(&self, value: ValueId) -> ValueResult<&str> {
        match self.value(value) {
            JsonValue::Str(text) => Ok(self.strings.get(*text)),
            other => Err(ValueError::type_mismatch("string", other.type_name())),
        }
    }

    /// Extract a boolean (strict)
    pub fn as_bool(&self, value: ValueId) -> ValueResult<bool> {
        match self.value(value) {
            JsonValue::Bool(b) => Ok(*b),
            other => Err(ValueError::type_mismatch("bool", other.type_name())),
        }
    }

    /// Extract an array's elements (strict)
    pub fn as_array(&self, value: ValueId) -> ValueResult<&[ValueId]> {
        match self.value(value) {
            JsonValue::Array(elems) => Ok(elems),
            other => Err(ValueError::type_mismatch("array", other.type_name())),
        }
    }

    /// Extract a nested object (strict)
    pub fn as_object(&self, value: ValueId) -> ValueResult<ObjectId> {
        match self.value(value) {
            JsonValue::Object(object) => Ok(*object),
            other => Err(ValueError::type_mismatch("object", other.type_name())),
        }
    }

    /// Extract an integer, or `0` when the tag does not match (permissive)
    pub fn int_or_default(&self, value: ValueId) -> i32 {
        self.as_int(value).unwrap_or_default()
    }

    /// Extract a float, or `0.0` when the tag does not match (permissive)
    pub fn float_or_default(&self, value: ValueId) -> f64 {
        self.as_float(value).unwrap_or_default()
    }

    /// Extract a string, or `""` when the tag does not match (permissive)
    pub fn str_or_default(&self, value: ValueId) -> &str {
        self.as_str(value).unwrap_or_default()
    }

    /// Extract a boolean, or `false` when the tag does not match (permissive)
    pub fn bool_or_default(&self, value: ValueId) -> bool {
        self.as_bool(value).unwrap_or_default()
    }

    // --- structural comparison ---

    /// Compare two values (possibly from different documents) by structure
    /// and content. Integers never equal floats; field order is significant.
    pub fn value_eq(&self, a: ValueId, other: &JsonDocument, b: ValueId) -> bool {
        match (self.value(a), other.value(b)) {
            (JsonValue::Int(x), JsonValue::Int(y)) => x == y,
            (JsonValue::Float(x), JsonValue::Float(y)) => x == y,
            (JsonValue::Bool(x), JsonValue::Bool(y)) => x == y,
            (JsonValue::Null, JsonValue::Null) => true,
            (JsonValue::Str(x), JsonValue::Str(y)) => {
                self.strings.get(*x) == other.strings.get(*y)
            }
            (JsonValue::Array(xs), JsonValue::Array(ys)) => {
                xs.len() == ys.len()
                    && xs
                        .iter()
                        .zip(ys.iter())
                        .all(|(&x, &y)| self.value_eq(x, other, y))
            }
            (JsonValue::Object(x), JsonValue::Object(y)) => self.object_eq(*x, other, *y),
            _ => false,
        }
    }

    /// Compare two objects field-by-field in insertion order
    pub fn object_eq(&self, a: ObjectId, other: &JsonDocument, b: ObjectId) -> bool {
        let a_fields = self.fields(a);
        let b_fields = other.fields(b);
        a_fields.len() == b_fields.len()
            && a_fields.iter().zip(b_fields.iter()).all(|(&x, &y)| {
                self.field_key(x) == other.field_key(y)
                    && self.value_eq(self.field_value(x), other, other.field_value(y))
            })
    }

    // --- release ---

    /// Release the auxiliary heap-backed storage of a subtree: each object's
    /// ordered field list and hash-index backing, and each array's element
    /// buffer. The slots themselves stay pool-resident until session
    /// teardown. The released subtree must not be used afterwards.
    pub fn free_object(&mut self, object: ObjectId) {
        let slot = &mut self.objects[object.0 as usize];
        let fields = std::mem::take(&mut slot.fields);
        slot.index = RawMap::new();
        for field in fields {
            let value = self.fields[field.0 as usize].value;
            self.free_value(value);
        }
    }

    fn free_value(&mut self, value: ValueId) {
        match &mut self.values[value.0 as usize] {
            JsonValue::Array(elems) => {
                let elems = std::mem::take(elems);
                for elem in elems {
                    self.free_value(elem);
                }
            }
            JsonValue::Object(object) => {
                let object = *object;
                self.free_object(object);
            }
            _ => {}
        }
    }

    /// Bulk-release the whole session; the document is afterwards empty and
    /// reusable. Invalidates every handle handed out so far.
    pub fn free_all(&mut self) {
        self.values.clear();
        self.fields.clear();
        self.objects.clear();
        self.strings.free_all();
        self.root = None;
    }

    /// Bytes of string storage currently held by the session arena
    pub fn string_bytes(&self) -> usize {
        self.strings.allocated_bytes()
    }
}
