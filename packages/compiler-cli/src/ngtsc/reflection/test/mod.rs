mod typescript_host_spec;
