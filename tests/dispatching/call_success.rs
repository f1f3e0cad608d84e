use plugin_link::{ Core, Val };
use crate::fixture_plugins::{ Fixture, Reply };

#[test]
fn call_success_test_first_answer_by_priority() {

	let ( catalog, journal ) = fixtures![
		Fixture::new( "p11" ).priority( 11 ).answers( "test_method", Reply::Nothing ),
		Fixture::new( "p33" ).priority( 33 ).answers( "test_method", Reply::Nothing ),
		Fixture::new( "p22" ).priority( 22 ).answers( "test_method", Reply::Value( "value".into() )),
	];
	let mut core = Core::new( catalog );
	core.load_all([ "p11", "p33", "p22" ]).unwrap();
	assert_no_drops!( core.init().unwrap() );

	assert_eq!( core.call_success( "test_method", &[] ).unwrap(), Some( Val::from( "value" )));
	assert_eq!( journal.calls( "test_method" ), [ "p33", "p22" ]);
	assert_eq!( journal.count( "call:p11:test_method" ), 0 );

}

#[test]
fn call_success_test_nobody_answers() {

	let ( catalog, journal ) = fixtures![
		Fixture::new( "module_a" ).answers( "test_method", Reply::Nothing ),
		Fixture::new( "module_b" ).answers( "test_method", Reply::Nothing ),
	];
	let mut core = Core::new( catalog );
	core.load_all([ "module_a", "module_b" ]).unwrap();
	core.init().unwrap();

	assert_eq!( core.call_success( "test_method", &[] ).unwrap(), None );
	assert_eq!( journal.calls( "test_method" ), [ "module_a", "module_b" ]);
	assert_eq!( core.call_success( "unheard_of", &[] ).unwrap(), None );

}
