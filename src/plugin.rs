//! The plugin contract.
//!
//! A plugin is any `Send + Sync` type implementing [`Plugin`]. It declares the
//! capabilities it implements (what other plugins may find it by) and the
//! [`Dependencies`] it needs (what must be loaded and initialised before it).
//! The operations it exposes to dispatch are registered explicitly through
//! [`Operations`] when the plugin is constructed.

use std::sync::Arc ;

use crate::{ CapabilityId, Core, Dependencies, Val };



/// Error type returned by plugin code.
pub type PluginError = Box<dyn std::error::Error + Send + Sync>;

/// What a dispatched operation returns. `Ok( None )` means "no answer".
pub type OperationResult = Result<Option<Val>, PluginError>;

/// Ordering key among providers of the same capability or operation.
///
/// Higher priorities are tried first. Providers with equal priority are tried
/// in the order their plugins were loaded.
#[derive( Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default )]
pub struct Priority( pub i32 );

impl std::fmt::Display for Priority {
    fn fmt( &self, f: &mut std::fmt::Formatter ) -> std::fmt::Result { write!( f, "{}", self.0 )}
}

impl From<i32> for Priority {
    fn from( value: i32 ) -> Self { Self( value ) }
}

/// The contract every plugin satisfies.
///
/// All methods have defaults, so an empty `impl Plugin for T {}` is a valid
/// plugin that implements nothing and depends on nothing.
///
/// # Example
///
/// ```
/// use plugin_link::{ Core, Dependencies, Operations, Plugin, Val };
///
/// struct Thumbnailer ;
///
/// impl Plugin for Thumbnailer {
///     fn implemented_capabilities( &self ) -> Vec<plugin_link::CapabilityId> {
///         vec![ "thumbnailer".into() ]
///     }
///     fn dependencies( &self ) -> Dependencies {
///         Dependencies::new().capability( "fs", [ "local_fs" ])
///     }
///     fn operations( &self, operations: &mut Operations<Self> ) {
///         operations.register( "thumbnail_get_size", | _this, _core, _args | Ok( Some( Val::U64( 64 ))));
///     }
/// }
/// ```
pub trait Plugin: Send + Sync + 'static {

    /// Capabilities this plugin implements. Read once, when the plugin is loaded.
    fn implemented_capabilities( &self ) -> Vec<CapabilityId> { Vec::new() }

    /// What must be loaded before this plugin is initialised. Read once, when
    /// the plugin is loaded.
    fn dependencies( &self ) -> Dependencies { Dependencies::new() }

    /// Position among other providers of the same capabilities and operations.
    fn priority( &self ) -> Priority { Priority::default() }

    /// Called once, after every dependency has been initialised.
    ///
    /// # Errors
    /// A failing `init` aborts [`Core::init`]( crate::Core::init ) unless the
    /// core is configured to drop unsatisfiable plugins.
    fn init( &self, _core: &Core ) -> Result<(), PluginError> { Ok(()) }

    /// Registers the operations this plugin exposes to dispatch.
    fn operations( &self, _operations: &mut Operations<Self> ) where Self: Sized {}

}

type PluginHandler<P> = Box<dyn Fn( &P, &Core, &[Val] ) -> OperationResult + Send + Sync>;

/// Handler bound to its plugin instance, as stored in the dispatch table.
pub(crate) type Handler = Arc<dyn Fn( &Core, &[Val] ) -> OperationResult + Send + Sync>;

/// Table of named operations a plugin contributes to dispatch.
///
/// Passed to [`Plugin::operations`] once, right after construction.
pub struct Operations<P> {
    entries: Vec<( String, PluginHandler<P> )>,
}

impl<P: Plugin> Operations<P> {

    pub(crate) fn new() -> Self { Self { entries: Vec::new() }}

    /// Registers `handler` under `name`. Registering the same name twice keeps
    /// the later handler.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: impl Fn( &P, &Core, &[Val] ) -> OperationResult + Send + Sync + 'static,
    ) -> &mut Self {
        let name = name.into();
        self.entries.retain(|( existing, _ )| *existing != name );
        self.entries.push(( name, Box::new( handler )));
        self
    }

    /// Names registered so far.
    pub fn names( &self ) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|( name, _ )| name.as_str() )
    }

    /// Binds every handler to the shared instance.
    pub(crate) fn bind( self, instance: &Arc<P> ) -> Vec<( String, Handler )> {
        self.entries.into_iter()
            .map(|( name, handler )| {
                let instance = Arc::clone( instance );
                let bound: Handler = Arc::new( move | core: &Core, args: &[Val] | handler( &instance, core, args ));
                ( name, bound )
            })
            .collect()
    }

}

impl<P> std::fmt::Debug for Operations<P> {
    fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
        f.debug_list().entries( self.entries.iter().map(|( name, _ )| name )).finish()
    }
}
