use plugin_link::Core ;
use crate::fixture_plugins::Fixture ;

#[test]
fn load_test_same_id_twice_constructs_once() {

	let ( catalog, journal ) = fixtures![ Fixture::new( "module_a" )];
	let mut core = Core::new( catalog );

	let first = core.load( "module_a", true ).unwrap().load_index();
	let second = core.load( "module_a", true ).unwrap().load_index();

	assert_eq!( first, second );
	assert_eq!( journal.count( "construct:module_a" ), 1 );
	assert_eq!( core.active_plugins(), [ "module_a" ]);

}

#[test]
fn load_test_does_not_call_init() {

	let ( catalog, journal ) = fixtures![ Fixture::new( "module_a" )];
	let mut core = Core::new( catalog );

	let descriptor = core.load( "module_a", true ).unwrap();
	assert!( !descriptor.is_initialised() );
	assert!( journal.inits().is_empty() );

	core.init().unwrap();
	assert!( core.get_by_name( "module_a" ).unwrap().is_initialised() );
	assert_eq!( journal.inits(), [ "module_a" ]);

}

#[test]
fn load_test_load_all_keeps_order() {

	let ( catalog, _ ) = fixtures![
		Fixture::new( "module_a" ),
		Fixture::new( "module_b" ),
		Fixture::new( "module_c" ),
	];
	let mut core = Core::new( catalog );

	core.load_all([ "module_c", "module_a", "module_b" ]).unwrap();

	assert_eq!( core.active_plugins(), [ "module_c", "module_a", "module_b" ]);
	assert_eq!( core.get_by_name( "module_b" ).unwrap().load_index(), 2 );

}
