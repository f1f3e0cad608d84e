use plugin_link::{ Core, InitError };
use crate::fixture_plugins::Fixture ;

#[test]
fn init_error_test_plugin_cycle() {

	let ( catalog, journal ) = fixtures![
		Fixture::new( "left" ).depends_on( "right" ),
		Fixture::new( "right" ).depends_on( "left" ),
	];
	let mut core = Core::new( catalog );

	core.load( "left", true ).unwrap();

	match core.init() {
		Err( InitError::CyclicDependency( cycle )) => assert_eq!( cycle, [ "left", "right", "left" ]),
		value => panic!( "Expected Err( CyclicDependency( .. )), found: {:#?}", value ),
	}
	assert!( journal.inits().is_empty() );

}

#[test]
fn init_error_test_capability_cycle() {

	let ( catalog, _ ) = fixtures![
		Fixture::new( "index" ).implements( "index" ).requires( "storage", [ "store" ]),
		Fixture::new( "store" ).implements( "storage" ).requires( "index", [ "index" ]),
		Fixture::new( "app" ).requires( "index", [ "index" ]),
	];
	let mut core = Core::new( catalog );

	core.load( "app", true ).unwrap();
	let error = core.init().unwrap_err();

	assert_eq!( error.to_string(), "Cyclic dependency: index -> store -> index" );

}
