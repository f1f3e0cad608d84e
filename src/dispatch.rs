//! Calling operations by name.
//!
//! Every plugin contributes named handlers to one shared dispatch table. Callers
//! pick a policy by how many answers they expect:
//!
//! | Policy | Handlers invoked | Zero handlers |
//! |--------|------------------|---------------|
//! | [`call_all`]( Core::call_all ) | all, in order | warning, `Ok( 0 )` |
//! | [`call_one`]( Core::call_one ) | the first only, warns if there are several | [`DispatchError::NoProvider`] |
//! | [`call_success`]( Core::call_success ) | in order until one returns `Some` | `Ok( None )` |
//!
//! "In order" means highest [`Priority`]( crate::Priority ) first, ties going to
//! the plugin loaded first.

use thiserror::Error ;
use tracing::{ trace, warn };

use crate::{ Core, PluginError, PluginId, Val };
use crate::registry::Ranked ;
use crate::plugin::Handler ;



/// Errors that can occur when dispatching an operation.
#[derive( Error, Debug )]
pub enum DispatchError {
    /// [`Core::call_one`] found no handler for the operation.
    #[error( "No provider for operation '{0}'" )]
    NoProvider( String ),
    /// A handler returned an error.
    #[error( "Operation '{operation}' failed in plugin '{plugin}': {source}" )]
    HandlerFailed {
        operation: String,
        plugin: PluginId,
        #[source] source: PluginError,
    },
}

impl DispatchError {
    /// The plugin whose handler failed, if any.
    pub fn plugin( &self ) -> Option<&PluginId> {
        match self {
            Self::NoProvider( _ ) => None,
            Self::HandlerFailed { plugin, .. } => Some( plugin ),
        }
    }
}

impl Core {

    /// Invokes every handler of `operation`, discarding their results.
    ///
    /// Returns how many handlers ran. No handler at all is not an error, only
    /// a warning.
    ///
    /// # Errors
    /// The first handler failure stops the broadcast and is returned.
    pub fn call_all( &self, operation: &str, args: &[Val] ) -> Result<usize, DispatchError> {
        let handlers = self.registry.handlers( operation );
        if handlers.is_empty() {
            warn!( operation, "call_all: no handler registered" );
            return Ok( 0 );
        }
        handlers.iter().try_for_each(| entry | invoke( self, operation, entry, args ).map(| _ | ()))?;
        Ok( handlers.len() )
    }

    /// Invokes the single handler of `operation` and returns its result.
    ///
    /// If several plugins registered the operation, a warning is logged and
    /// only the highest-priority handler runs.
    ///
    /// # Errors
    /// [`DispatchError::NoProvider`] if nothing handles `operation`, or the
    /// handler's own failure.
    pub fn call_one( &self, operation: &str, args: &[Val] ) -> Result<Option<Val>, DispatchError> {
        let handlers = self.registry.handlers( operation );
        let Some( first ) = handlers.first() else {
            return Err( DispatchError::NoProvider( operation.to_string() ));
        };
        if handlers.len() > 1 {
            warn!(
                operation,
                handlers = handlers.len(),
                chosen = %first.plugin,
                "call_one: more than one handler registered, using the first"
            );
        }
        invoke( self, operation, first, args )
    }

    /// Invokes the handlers of `operation` in order until one returns `Some`.
    ///
    /// `Ok( None )` means nobody answered, including when nothing handles
    /// the operation.
    ///
    /// # Errors
    /// A handler failure stops the search and is returned.
    pub fn call_success( &self, operation: &str, args: &[Val] ) -> Result<Option<Val>, DispatchError> {
        for entry in self.registry.handlers( operation ) {
            if let Some( value ) = invoke( self, operation, entry, args )? {
                return Ok( Some( value ));
            }
        }
        trace!( operation, "call_success: no handler returned a value" );
        Ok( None )
    }

    /// Owners of the handlers of `operation`, in dispatch order.
    pub fn providers_of( &self, operation: &str ) -> Vec<PluginId> {
        self.registry.handlers( operation ).iter().map(| entry | entry.plugin.clone() ).collect()
    }

    /// Every operation with at least one handler, sorted.
    pub fn operations( &self ) -> Vec<&str> {
        let mut operations = self.registry.operations().collect::<Vec<_>>();
        operations.sort_unstable();
        operations
    }

}

#[inline] fn invoke(
    core: &Core,
    operation: &str,
    entry: &Ranked<Handler>,
    args: &[Val],
) -> Result<Option<Val>, DispatchError> {
    trace!( operation, plugin = %entry.plugin, priority = %entry.priority, "dispatching" );
    ( entry.value )( core, args ).map_err(| source | DispatchError::HandlerFailed {
        operation: operation.to_string(),
        plugin: entry.plugin.clone(),
        source,
    })
}
