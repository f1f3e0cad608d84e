use plugin_link::{ Core, InitError };
use crate::fixture_plugins::Fixture ;

#[test]
fn unsatisfied_defaults_test_default_without_capability() {

	let ( catalog, journal ) = fixtures![
		Fixture::new( "module_a" ).implements( "something_else" ),
		Fixture::new( "module_b" ).requires( "storage", [ "module_a" ]),
	];
	let mut core = Core::new( catalog );

	core.load( "module_b", true ).unwrap();

	match core.init() {
		Err( InitError::UnsatisfiedDependency { plugin, capability }) => {
			assert_eq!( plugin, "module_b" );
			assert_eq!( capability, "storage" );
		}
		value => panic!( "Expected Err( UnsatisfiedDependency {{ .. }}), found: {:#?}", value ),
	}
	assert!( journal.inits().is_empty() );

}

#[test]
fn unsatisfied_defaults_test_no_defaults() {

	let ( catalog, _ ) = fixtures![ Fixture::new( "module_b" ).requires( "storage", [])];
	let mut core = Core::new( catalog );

	core.load( "module_b", true ).unwrap();

	assert!( matches!( core.init(), Err( InitError::UnsatisfiedDependency { .. })));

}
