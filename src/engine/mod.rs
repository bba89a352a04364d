// Engine modules: input, output, console, timing and the control loop

pub mod cleaner;
pub mod console;
pub mod input;
pub mod output;
pub mod tick_loop;

#[cfg(test)]
pub mod testing;
