//! GLSL programs.

use std::{cmp, ffi, fmt, hash, ops, path};

use crate::driver::Driver;
use crate::error::Error;
use crate::shader::{self, Kind};
use crate::source;

/// OpenGL program ID type.
pub(crate) type Id = u32;

/// A compiled and linked shader program.
///
/// A `Program` only ever exists in the linked state: every construction
/// failure is returned as an [`Error`] instead. The program is deleted when
/// the value is dropped.
///
/// [`Error`]: ../error/enum.Error.html
pub struct Program<D: Driver> {
    /// The OpenGL program ID.
    id: Id,

    /// Deletes the program upon destruction.
    driver: D,
}

impl<D: Driver> Program<D> {
    /// Compile and link a program from vertex and fragment source text.
    ///
    /// Both stages are compiled, and each failure logged, before the first
    /// failure is returned. Linking only happens when both compiled. The
    /// compiled stages are deleted once the program has linked.
    pub fn from_source(driver: &D, vertex: &str, fragment: &str) -> Result<Self, Error> {
        let vertex = shader::Object::compile(driver, Kind::Vertex, vertex);
        let fragment = shader::Object::compile(driver, Kind::Fragment, fragment);
        let (vertex, fragment) = (vertex?, fragment?);
        Self::link(driver, &vertex, &fragment)
    }

    /// Read, compile and link a program from vertex and fragment source
    /// files.
    ///
    /// Both files are read before anything is handed to the driver, so a
    /// load failure never reaches compilation.
    pub fn from_files<P, Q>(driver: &D, vertex: P, fragment: Q) -> Result<Self, Error>
        where P: AsRef<path::Path>, Q: AsRef<path::Path>
    {
        let sources = source::read(vertex).and_then(|vertex| {
            source::read(fragment).map(|fragment| (vertex, fragment))
        });
        match sources {
            Ok((vertex, fragment)) => Self::from_source(driver, &vertex, &fragment),
            Err(error) => {
                error!(target: "shader", "{}", error);
                Err(error)
            }
        }
    }

    /// Link compiled shader objects into a program.
    ///
    /// The objects are left untouched and may be linked again.
    pub fn link(
        driver: &D,
        vertex: &shader::Object<D>,
        fragment: &shader::Object<D>,
    ) -> Result<Self, Error> {
        let program = Program {
            id: driver.create_program(),
            driver: driver.clone(),
        };
        driver.attach_shader(program.id, vertex.id());
        driver.attach_shader(program.id, fragment.id());
        if driver.link_program(program.id) {
            debug!(target: "shader", "program {} linked", program.id);
            Ok(program)
        } else {
            let log = driver.program_info_log(program.id);
            error!(target: "shader", "program failed to link:\n{}", log);
            Err(Error::Link { log })
        }
    }

    /// Make this the current program for subsequent draw calls.
    pub fn bind(&self) {
        self.driver.use_program(self.id);
    }

    /// Retrieves the location of a named uniform.
    ///
    /// Returns `None` if the program has no active uniform by that name.
    pub fn uniform_location(&self, name: &str) -> Option<i32> {
        let name = match ffi::CString::new(name) {
            Ok(name) => name,
            Err(_) => return None,
        };
        match self.driver.get_uniform_location(self.id, &name) {
            -1 => None,
            x => Some(x),
        }
    }

    /// Sets a `bool` uniform. See [`set_int`](#method.set_int).
    pub fn set_bool(&self, name: &str, value: bool) {
        self.set_int(name, value as i32);
    }

    /// Sets an `int` uniform.
    ///
    /// The program must be current for the value to take effect. Names the
    /// program does not have are ignored.
    pub fn set_int(&self, name: &str, value: i32) {
        if let Some(location) = self.located(name) {
            self.driver.uniform_1i(location, value);
        }
    }

    /// Sets a `float` uniform. See [`set_int`](#method.set_int).
    pub fn set_float(&self, name: &str, value: f32) {
        if let Some(location) = self.located(name) {
            self.driver.uniform_1f(location, value);
        }
    }

    fn located(&self, name: &str) -> Option<i32> {
        let location = self.uniform_location(name);
        if location.is_none() {
            debug!(target: "shader", "program {} has no uniform {:?}", self.id, name);
        }
        location
    }

    /// Returns the OpenGL program ID.
    pub fn id(&self) -> Id {
        self.id
    }
}

impl<D: Driver> ops::Drop for Program<D> {
    fn drop(&mut self) {
        self.driver.delete_program(self.id);
    }
}

impl<D: Driver> cmp::Eq for Program<D> {}

impl<D: Driver> cmp::PartialEq<Self> for Program<D> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<D: Driver> fmt::Debug for Program<D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        #[derive(Debug)]
        struct Program(u32);

        Program(self.id).fmt(f)
    }
}

impl<D: Driver> hash::Hash for Program<D> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}
