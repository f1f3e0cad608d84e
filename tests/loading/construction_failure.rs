use plugin_link::{ Core, LoadError };
use crate::fixture_plugins::Fixture ;

#[test]
fn load_error_test_construction_failure_registers_nothing() {

	let ( catalog, journal ) = fixtures![
		Fixture::new( "module_a" )
			.implements( "storage" )
			.answers( "doc_count", crate::fixture_plugins::Reply::Nothing )
			.failing_construction(),
	];
	let mut core = Core::new( catalog );

	match core.load( "module_a", true ) {
		Err( LoadError::ConstructionFailed( id, error )) => {
			assert_eq!( id, "module_a" );
			assert_eq!( error.to_string(), "module_a is broken" );
		}
		value => panic!( "Expected Err( ConstructionFailed( .. )), found: {:#?}", value ),
	}

	assert_eq!( journal.count( "construct:module_a" ), 1 );
	assert!( core.get_by_interface( "storage" ).is_empty() );
	assert!( core.providers_of( "doc_count" ).is_empty() );
	assert!( core.get_by_name( "module_a" ).is_err() );

}
