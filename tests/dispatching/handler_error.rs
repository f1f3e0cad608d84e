use plugin_link::{ Core, DispatchError };
use crate::fixture_plugins::{ Fixture, Reply };

#[test]
fn handler_error_test_stops_broadcast() {

	let ( catalog, journal ) = fixtures![
		Fixture::new( "first" ).priority( 2 ).answers( "save", Reply::Nothing ),
		Fixture::new( "broken" ).priority( 1 ).answers( "save", Reply::Fail( "disk full" )),
		Fixture::new( "last" ).answers( "save", Reply::Nothing ),
	];
	let mut core = Core::new( catalog );
	core.load_all([ "first", "broken", "last" ]).unwrap();
	core.init().unwrap();

	match core.call_all( "save", &[] ) {
		Err( DispatchError::HandlerFailed { operation, plugin, source }) => {
			assert_eq!( operation, "save" );
			assert_eq!( plugin, "broken" );
			assert_eq!( source.to_string(), "disk full" );
		}
		value => panic!( "Expected Err( HandlerFailed {{ .. }}), found: {:#?}", value ),
	}
	assert_eq!( journal.calls( "save" ), [ "first", "broken" ]);

}

#[test]
fn handler_error_test_stops_success_search() {

	let ( catalog, journal ) = fixtures![
		Fixture::new( "broken" ).priority( 1 ).answers( "find", Reply::Fail( "index corrupt" )),
		Fixture::new( "healthy" ).answers( "find", Reply::Value( "found".into() )),
	];
	let mut core = Core::new( catalog );
	core.load_all([ "broken", "healthy" ]).unwrap();
	core.init().unwrap();

	let error = core.call_success( "find", &[] ).unwrap_err();

	assert_eq!( error.plugin().map( |plugin| plugin.as_str() ), Some( "broken" ));
	assert_eq!( error.to_string(), "Operation 'find' failed in plugin 'broken': index corrupt" );
	assert_eq!( journal.count( "call:healthy:find" ), 0 );

}
