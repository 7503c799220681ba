mod helpers;
mod test_list;
mod test_pipeline;
mod test_run;
