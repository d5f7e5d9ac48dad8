pub(crate) mod std_prompt;

pub(crate) use std_prompt::StdPrompt;
