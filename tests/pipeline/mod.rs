mod connect_and_run;
mod run;
