//! A plugin registry and dispatch core for building modular applications.
//!
//! Applications built on `plugin_link` are made of small plugins that never hold
//! references to each other. Each plugin declares the **capabilities** it
//! implements and the **dependencies** it requires, either specific plugins or
//! "some provider of capability X". The [`Core`] loads plugins by name, pulls in
//! default providers for missing capabilities, initialises everything in
//! dependency order and then routes named operations between plugins.
//!
//! # Core Concepts
//!
//! - [`Plugin`]: The contract a plugin implements. Every method has a default,
//! 	so plugins only spell out what they need.
//!
//! - [`PluginCatalog`]: Maps plugin ids to constructors. Loading a plugin "by
//! 	name" means looking it up here.
//!
//! - [`Dependencies`]: What a plugin needs before its `init` can run. Capability
//! 	dependencies carry an ordered list of default providers.
//!
//! - [`Operations`]: The table of named handlers a plugin registers. Any loaded
//! 	plugin's handler is a dispatch candidate under its name.
//!
//! - [`Core`]: Loads, resolves, initialises and dispatches. See [`Core::call_all`],
//! 	[`Core::call_one`] and [`Core::call_success`] for the three dispatch policies.
//!
//! # Example
//!
//! ```
//! use std::sync::Mutex ;
//! use plugin_link::{ Core, Dependencies, Operations, Plugin, PluginCatalog, Priority, Val };
//!
//! // A storage backend, found through the `storage` capability.
//! #[derive( Default )]
//! struct MemoryStorage { documents: Mutex<Vec<String>> }
//!
//! impl Plugin for MemoryStorage {
//! 	fn implemented_capabilities( &self ) -> Vec<plugin_link::CapabilityId> { vec![ "storage".into() ]}
//! 	fn operations( &self, operations: &mut Operations<Self> ) {
//! 		operations
//! 			.register( "doc_add", | this, _core, args | {
//! 				let name = args.first().and_then( Val::as_str ).ok_or( "expected a name" )?;
//! 				this.documents.lock().map_err(| _ | "poisoned" )?.push( name.to_string() );
//! 				Ok( None )
//! 			})
//! 			.register( "doc_count", | this, _core, _args | {
//! 				let count = this.documents.lock().map_err(| _ | "poisoned" )?.len();
//! 				Ok( Some( Val::U64( count as u64 )))
//! 			});
//! 	}
//! }
//!
//! // An importer that needs some storage, defaulting to `memory_storage`.
//! struct Importer ;
//!
//! impl Plugin for Importer {
//! 	fn dependencies( &self ) -> Dependencies {
//! 		Dependencies::new().capability( "storage", [ "memory_storage" ])
//! 	}
//! 	fn priority( &self ) -> Priority { Priority( 10 ) }
//! 	fn operations( &self, operations: &mut Operations<Self> ) {
//! 		operations.register( "import", | _this, core, args | {
//! 			core.call_all( "doc_add", args )?;
//! 			Ok( None )
//! 		});
//! 	}
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = PluginCatalog::new()
//! 	.with_default::<MemoryStorage>( "memory_storage" )
//! 	.with( "importer", || Ok( Importer ));
//!
//! let mut core = Core::new( catalog );
//! core.load( "importer", true )?;
//! let report = core.init()?;
//! assert_eq!( report.initialised, [ "memory_storage", "importer" ]);
//!
//! core.call_all( "import", &[ Val::from( "invoice.pdf" )])?;
//! assert_eq!( core.call_one( "doc_count", &[] )?, Some( Val::U64( 1 )));
//! assert_eq!( core.explicits(), [ "importer" ]);
//! # Ok(())
//! # }
//! ```
//!
//! # Strict Mode
//!
//! With [`CoreConfig::strict`], nothing is loaded on a plugin's behalf. Plugins
//! whose dependencies the host didn't load are dropped during [`Core::init`],
//! together with every plugin that relied on them.
//!
//! ```
//! # use plugin_link::{ Core, CoreConfig, Dependencies, Plugin, PluginCatalog };
//! # struct Importer ;
//! # impl Plugin for Importer {
//! # 	fn dependencies( &self ) -> Dependencies { Dependencies::new().capability( "storage", [ "memory_storage" ])}
//! # }
//! let catalog = PluginCatalog::new().with( "importer", || Ok( Importer ));
//! let mut core = Core::with_config( catalog, CoreConfig::strict() );
//! core.load( "importer", true ).unwrap();
//!
//! let report = core.init().unwrap();
//! assert_eq!( report.dropped, [ "importer" ]);
//! assert!( core.get_by_name( "importer" ).unwrap_err().is_not_found() );
//! ```
//!
//! # Logging
//!
//! The core emits [`tracing`] events: loads and resolution steps at `debug`,
//! drops and dispatch edge cases at `warn`. Installing a subscriber is up to
//! the host.

mod ids ;
mod val ;
mod plugin ;
mod dependencies ;
mod descriptor ;
mod catalog ;
mod registry ;
mod resolver ;
mod initialiser ;
mod config ;
mod facade ;
mod dispatch ;

pub use ids::{ PluginId, CapabilityId };
pub use val::{ Val, Opaque };
pub use plugin::{ Plugin, PluginError, OperationResult, Operations, Priority };
pub use dependencies::{ Dependencies, CapabilityDependency };
pub use descriptor::PluginDescriptor ;
pub use catalog::{ PluginCatalog, LoadError };
pub use initialiser::InitError ;
pub use config::{ CoreConfig, ConfigError };
pub use facade::{ Core, InitReport, LookupError };
pub use dispatch::DispatchError ;
