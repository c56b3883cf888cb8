// Copyright (c) 2023 Bastiaan Marinus van de Weerd


macro_rules! mod_days {
	[ $( $day:literal ),+ $(,)? ] => { paste::paste! {
		$( pub(crate) mod [<day $day>]; )+
	} };
}

pub(crate) use mod_days;
