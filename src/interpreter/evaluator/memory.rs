use std::{
    collections::HashMap,
    fmt,
    ops::{Deref, DerefMut},
};

use crate::interpreter::value::core::Value;

/// Variable bindings that remember the order of their first assignment.
///
/// Re-assigning a name updates its value in place without moving it.
///
/// # Example
/// ```
/// use pasquale::interpreter::{evaluator::memory::Bindings, value::core::Value};
///
/// let mut bindings = Bindings::default();
/// bindings.insert("b", Value::Integer(1));
/// bindings.insert("a", Value::Integer(2));
/// bindings.insert("b", Value::Integer(3));
///
/// let names: Vec<_> = bindings.iter().map(|(name, _)| name).collect();
/// assert_eq!(names, ["b", "a"]);
/// assert_eq!(bindings.get("b"), Some(Value::Integer(3)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    entries: Vec<(String, Value)>,
    index:   HashMap<String, usize>,
}

impl Bindings {
    /// The value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.index.get(name).map(|&i| self.entries[i].1)
    }

    /// Binds `name` to `value`.
    pub fn insert(&mut self, name: &str, value: Value) {
        if let Some(&i) = self.index.get(name) {
            self.entries[i].1 = value;
        } else {
            self.index.insert(name.to_string(), self.entries.len());
            self.entries.push((name.to_string(), value));
        }
    }

    /// Iterates over the bindings in first-assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Number of bound names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no name is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One `name = value` line per binding.
impl fmt::Display for Bindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.iter() {
            writeln!(f, "{name} = {value}")?;
        }
        Ok(())
    }
}

/// An activation record.
///
/// The program body gets one frame; every procedure call gets its own.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Name of the program or procedure the frame belongs to.
    pub name:         String,
    /// Scope level of the block executing in this frame.
    pub static_scope: usize,
    /// Index of the frame of the lexically enclosing block, if any.
    pub static_link:  Option<usize>,
    /// The variables assigned so far.
    pub variables:    Bindings,
}

impl Frame {
    /// Creates an empty frame.
    #[must_use]
    pub fn new(name: &str, static_scope: usize, static_link: Option<usize>) -> Self {
        Self { name: name.to_string(),
               static_scope,
               static_link,
               variables: Bindings::default() }
    }
}

/// The stack of active frames.
///
/// The bottom frame always belongs to the program body.
#[derive(Debug)]
pub struct Memory {
    frames: Vec<Frame>,
}

impl Memory {
    /// Creates a stack holding the program frame only.
    #[must_use]
    pub fn new(program_name: &str) -> Self {
        Self { frames: vec![Frame::new(program_name, 0, None)] }
    }

    /// Number of active frames.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Index of the top-of-stack frame.
    #[must_use]
    pub fn top_index(&self) -> usize {
        self.frames.len() - 1
    }

    /// The frame at `index`.
    #[must_use]
    pub fn frame(&self, index: usize) -> &Frame {
        &self.frames[index]
    }

    /// The frame at `index`, mutably.
    pub fn frame_mut(&mut self, index: usize) -> &mut Frame {
        &mut self.frames[index]
    }

    /// Follows static links from the top frame to the frame running the
    /// block at scope `level`.
    ///
    /// # Returns
    /// The index of that frame, or `None` if no frame on the static chain
    /// runs at that level.
    #[must_use]
    pub fn frame_for_scope(&self, level: usize) -> Option<usize> {
        let mut index = Some(self.top_index());
        while let Some(i) = index {
            let frame = &self.frames[i];
            if frame.static_scope == level {
                return Some(i);
            }
            index = frame.static_link;
        }
        None
    }

    /// Pushes `frame` for the lifetime of the returned guard.
    ///
    /// The guard derefs to the memory and pops the frame when dropped, on
    /// both normal and error exits.
    ///
    /// # Example
    /// ```
    /// use pasquale::interpreter::evaluator::memory::{Frame, Memory};
    ///
    /// let mut memory = Memory::new("main");
    /// {
    ///     let guard = memory.push_frame(Frame::new("callee", 1, Some(0)));
    ///     assert_eq!(guard.depth(), 2);
    /// }
    /// assert_eq!(memory.depth(), 1);
    /// ```
    pub fn push_frame(&mut self, frame: Frame) -> FrameGuard<'_> {
        self.frames.push(frame);
        FrameGuard { memory: self }
    }

    /// Consumes the memory and returns the program frame's bindings.
    #[must_use]
    pub fn into_bindings(self) -> Bindings {
        self.frames
            .into_iter()
            .next()
            .map(|frame| frame.variables)
            .unwrap_or_default()
    }
}

/// Keeps a frame pushed for as long as it lives.
pub struct FrameGuard<'a> {
    memory: &'a mut Memory,
}

impl Deref for FrameGuard<'_> {
    type Target = Memory;

    fn deref(&self) -> &Self::Target {
        self.memory
    }
}

impl DerefMut for FrameGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.memory
    }
}

impl Drop for FrameGuard<'_> {
    fn drop(&mut self) {
        self.memory.frames.pop();
    }
}
