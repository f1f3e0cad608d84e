//! The façade hosts and plugins talk to.
//!
//! A [`Core`] is built from a [`PluginCatalog`], then driven in two phases:
//!
//! 1. **Loading and initialisation** (`&mut Core`): the host [`load`]( Core::load )s
//! 	the plugins it wants and calls [`init`]( Core::init ) once. Dependencies are
//! 	resolved and every plugin's `init` hook runs, dependencies first.
//! 2. **Dispatch** (`&Core`): everything goes through [`call_all`]( Core::call_all ),
//! 	[`call_one`]( Core::call_one ) and [`call_success`]( Core::call_success ).
//! 	The core is `Send + Sync` and nothing mutates it in this phase.

use std::sync::Arc ;
use thiserror::Error ;
use tracing::{ debug, info, warn };

use crate::{ CapabilityId, CoreConfig, Plugin, PluginCatalog, PluginDescriptor, PluginId, LoadError, InitError };
use crate::registry::Registry ;
use crate::{ initialiser, resolver };



/// Errors looking up a loaded plugin.
#[derive( Error, Debug, PartialEq, Eq )]
pub enum LookupError {
    /// The plugin was never loaded.
    #[error( "Plugin not found: '{0}'" )]
    NotFound( PluginId ),
    /// The plugin was loaded but dropped because its dependencies could not be satisfied.
    #[error( "Plugin not found: '{0}' (dropped during initialisation)" )]
    Dropped( PluginId ),
    /// No loaded plugin implements the capability.
    #[error( "No provider for capability '{0}'" )]
    NoProvider( CapabilityId ),
    /// The plugin exists but is not of the requested type.
    #[error( "Plugin '{0}' is not of the requested type" )]
    TypeMismatch( PluginId ),
}

impl LookupError {
    /// True for both never-loaded and dropped plugins.
    pub fn is_not_found( &self ) -> bool {
        matches!( self, Self::NotFound( _ ) | Self::Dropped( _ ))
    }
}

/// Outcome of a successful [`Core::init`].
#[derive( Debug, Clone, Default, PartialEq, Eq )]
pub struct InitReport {
    /// Plugins whose `init` ran, in the order it ran.
    pub initialised: Vec<PluginId>,
    /// Plugins removed because their dependencies could not be satisfied.
    pub dropped: Vec<PluginId>,
}

/// Plugin registry, dependency resolver and dispatcher.
///
/// ```
/// use plugin_link::{ Core, CoreConfig, Dependencies, Operations, Plugin, PluginCatalog, Val };
///
/// struct Ocr ;
/// impl Plugin for Ocr {
///     fn implemented_capabilities( &self ) -> Vec<plugin_link::CapabilityId> { vec![ "ocr".into() ]}
///     fn operations( &self, operations: &mut Operations<Self> ) {
///         operations.register( "ocr_get_language", | _, _, _ | Ok( Some( Val::from( "eng" ))));
///     }
/// }
///
/// struct Scanner ;
/// impl Plugin for Scanner {
///     fn dependencies( &self ) -> Dependencies { Dependencies::new().capability( "ocr", [ "tesseract" ])}
/// }
///
/// let catalog = PluginCatalog::new()
///     .with( "tesseract", || Ok( Ocr ))
///     .with( "scanner", || Ok( Scanner ));
///
/// let mut core = Core::new( catalog );
/// core.load( "scanner", true ).unwrap();
/// core.init().unwrap();
///
/// // `tesseract` was loaded as the default `ocr` provider.
/// assert_eq!( core.get_by_interface( "ocr" ).len(), 1 );
/// let language = core.call_one( "ocr_get_language", &[] ).unwrap();
/// assert_eq!( language, Some( Val::from( "eng" )));
/// ```
pub struct Core {
    config: CoreConfig,
    catalog: PluginCatalog,
    pub(crate) registry: Registry,
}

impl Core {

    /// A core with the default configuration: missing dependencies are
    /// auto-loaded and failing to satisfy them aborts [`init`]( Self::init ).
    pub fn new( catalog: PluginCatalog ) -> Self {
        Self::with_config( catalog, CoreConfig::default() )
    }

    pub fn with_config( catalog: PluginCatalog, config: CoreConfig ) -> Self {
        Self { config, catalog, registry: Registry::default() }
    }

    #[inline] pub fn config( &self ) -> CoreConfig { self.config }

    #[inline] pub fn catalog( &self ) -> &PluginCatalog { &self.catalog }

    /// Loads the plugin `id`, unless it is loaded already.
    ///
    /// Loading constructs the plugin and registers its capabilities and
    /// operations. It does not call `init`; that happens in [`init`]( Self::init ).
    /// Loading an id twice returns the existing descriptor. Passing `explicit`
    /// marks the plugin as requested by the host, see [`explicits`]( Self::explicits ).
    ///
    /// # Errors
    /// Fails if the catalog has no plugin `id` or if its constructor fails.
    pub fn load( &mut self, id: impl Into<PluginId>, explicit: bool ) -> Result<&PluginDescriptor, LoadError> {
        let id = id.into();
        self.registry.load( &self.catalog, &id, explicit )
    }

    /// Explicitly loads every id in order, stopping at the first failure.
    ///
    /// # Errors
    /// The first [`LoadError`] encountered.
    pub fn load_all<I>( &mut self, ids: I ) -> Result<(), LoadError>
    where
        I: IntoIterator,
        I::Item: Into<PluginId>,
    {
        ids.into_iter().try_for_each(| id | self.load( id, true ).map(| _ | ()))
    }

    /// Resolves dependencies, then initialises every pending plugin,
    /// dependencies first.
    ///
    /// Plugins already initialised by an earlier call are left alone, so a
    /// host may load more plugins and call `init` again.
    ///
    /// # Errors
    /// - [`InitError::Load`] if a dependency fails to load
    /// - [`InitError::UnsatisfiedDependency`] if defaults don't provide their capability
    /// - [`InitError::CyclicDependency`] if plugins depend on each other in a loop
    /// - [`InitError::InitFailed`] if a plugin's `init` fails
    ///
    /// With [`CoreConfig::allow_unsatisfied`], load and init failures drop the
    /// affected plugins instead. Cycles are always fatal.
    pub fn init( &mut self ) -> Result<InitReport, InitError> {

        info!( pending = self.registry.pending().len(), "initialising plugins" );

        let mut dropped = resolver::resolve( &mut self.registry, &self.catalog, self.config )?;
        let order = initialiser::initialisation_order( &self.registry )?;
        let mut initialised = Vec::with_capacity( order.len() );

        for id in order {

            // Dropped after a failing dependency's init.
            let Some( descriptor ) = self.registry.get( id.as_str() ) else { continue };
            let instance = Arc::clone( &descriptor.instance );

            debug!( plugin = %id, "initialising plugin" );
            match instance.init( self ) {
                Ok(()) => {
                    self.registry.mark_initialised( &id );
                    initialised.push( id );
                },
                Err( err ) if self.config.allow_unsatisfied => {
                    warn!( plugin = %id, error = %err, "plugin failed to initialise, dropping it" );
                    self.registry.remove( &id );
                    dropped.push( id );
                    dropped.extend( resolver::drop_unsatisfied( &mut self.registry ));
                },
                Err( err ) => return Err( InitError::InitFailed( id, err )),
            }

        }

        info!( initialised = initialised.len(), dropped = dropped.len(), "plugins initialised" );
        Ok( InitReport { initialised, dropped })

    }

    /// The loaded plugin `id`.
    ///
    /// # Errors
    /// [`LookupError::NotFound`] or, for plugins dropped by [`init`]( Self::init ),
    /// [`LookupError::Dropped`].
    pub fn get_by_name( &self, id: &str ) -> Result<&PluginDescriptor, LookupError> {
        self.registry.get( id ).ok_or_else(|| match self.registry.is_dropped( id ) {
            true => LookupError::Dropped( id.into() ),
            false => LookupError::NotFound( id.into() ),
        })
    }

    /// The loaded plugin `id` as its concrete type.
    ///
    /// # Errors
    /// As [`get_by_name`]( Self::get_by_name ), plus [`LookupError::TypeMismatch`].
    pub fn get<T: Plugin>( &self, id: &str ) -> Result<Arc<T>, LookupError> {
        self.get_by_name( id )?
            .downcast::<T>()
            .ok_or_else(|| LookupError::TypeMismatch( id.into() ))
    }

    /// Every loaded provider of `capability`, highest priority first.
    pub fn get_by_interface( &self, capability: &str ) -> Vec<&PluginDescriptor> {
        self.registry.providers( capability )
            .filter_map(| id | self.registry.get( id.as_str() ))
            .collect()
    }

    /// The preferred provider of `capability`.
    ///
    /// # Errors
    /// [`LookupError::NoProvider`] if nothing loaded implements it.
    pub fn get_by_interface_one( &self, capability: &str ) -> Result<&PluginDescriptor, LookupError> {
        self.get_by_interface( capability )
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::NoProvider( capability.into() ))
    }

    /// Ids of the plugins the host loaded explicitly, in load order.
    pub fn explicits( &self ) -> Vec<PluginId> {
        self.registry.in_load_order()
            .filter(| descriptor | descriptor.is_explicit() )
            .map(| descriptor | descriptor.id().clone() )
            .collect()
    }

    /// Ids of every loaded plugin, in load order.
    pub fn active_plugins( &self ) -> Vec<PluginId> {
        self.registry.in_load_order().map(| descriptor | descriptor.id().clone() ).collect()
    }

    /// Every capability with at least one loaded provider.
    pub fn capabilities( &self ) -> Vec<&CapabilityId> {
        let mut capabilities = self.registry.capabilities().collect::<Vec<_>>();
        capabilities.sort();
        capabilities
    }

}

impl std::fmt::Debug for Core {
    fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
        f.debug_struct( "Core" )
            .field( "config", &self.config )
            .field( "catalog", &self.catalog )
            .field( "plugins", &self.active_plugins() )
            .finish_non_exhaustive()
    }
}
