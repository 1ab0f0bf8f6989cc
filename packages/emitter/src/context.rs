use std::cell::RefCell;
use std::rc::Rc;

/// Options for C# emission
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// One level of indentation
    pub indent: String,
    /// Whether to open the file with `#nullable enable`
    pub nullable_directive: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            nullable_directive: true,
        }
    }
}

/// Emission context for managing state during code generation
pub struct EmitContext {
    buffer: Rc<RefCell<String>>,
    indent_level: Rc<RefCell<usize>>,
    pub options: EmitOptions,
}

impl EmitContext {
    pub fn new(options: EmitOptions) -> Self {
        Self {
            buffer: Rc::new(RefCell::new(String::new())),
            indent_level: Rc::new(RefCell::new(0)),
            options,
        }
    }

    pub fn add(&self, text: &str) {
        self.buffer.borrow_mut().push_str(text);
    }

    pub fn add_line(&self, text: &str) {
        self.add_indented(text);
        self.add("\n");
    }

    pub fn add_indented(&self, text: &str) {
        let indent = self.options.indent.repeat(*self.indent_level.borrow());
        self.buffer.borrow_mut().push_str(&indent);
        self.buffer.borrow_mut().push_str(text);
    }

    /// Blank line, without trailing indentation
    pub fn blank_line(&self) {
        self.add("\n");
    }

    pub fn indent(&self) {
        *self.indent_level.borrow_mut() += 1;
    }

    pub fn dedent(&self) {
        let mut level = self.indent_level.borrow_mut();
        if *level > 0 {
            *level -= 1;
        }
    }

    /// Open a `{` block on its own line and indent
    pub fn open_block(&self) {
        self.add_line("{");
        self.indent();
    }

    pub fn close_block(&self) {
        self.dedent();
        self.add_line("}");
    }

    pub fn get_output(&self) -> String {
        self.buffer.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.borrow().is_empty()
    }

    /// Fresh buffer sharing this context's indentation level
    pub fn with_new_buffer(&self) -> Self {
        Self {
            buffer: Rc::new(RefCell::new(String::new())),
            indent_level: self.indent_level.clone(),
            options: self.options.clone(),
        }
    }

    pub fn merge_buffer(&self, other: &EmitContext) {
        self.buffer.borrow_mut().push_str(&other.buffer.borrow());
    }
}
